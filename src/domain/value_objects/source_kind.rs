//! Source kind of a service description.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of external source a service description points at.
///
/// Only [`SourceKind::Wsdl`] sources are synchronized; the other kinds are
/// stored and listed but cannot be updated or refreshed through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Wsdl,
    #[serde(rename = "openapi3")]
    OpenApi3,
}

impl SourceKind {
    pub fn is_wsdl(self) -> bool {
        matches!(self, SourceKind::Wsdl)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Wsdl => "wsdl",
            SourceKind::OpenApi3 => "openapi3",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
