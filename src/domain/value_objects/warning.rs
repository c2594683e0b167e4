//! Acknowledgeable warnings.

use serde::{Deserialize, Serialize};

/// Validator reported structural findings for the source.
pub const WARNING_WSDL_VALIDATION_WARNINGS: &str = "clients.wsdl_validation_warnings";
/// The new source declares operations the description does not have yet.
pub const WARNING_ADDING_SERVICES: &str = "clients.adding_services";
/// The new source no longer declares some of the description's operations.
pub const WARNING_DELETING_SERVICES: &str = "clients.deleting_services";

/// A non-fatal finding the caller may acknowledge by resubmitting with
/// `ignore_warnings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub code: String,
    #[serde(default)]
    pub metadata: Vec<String>,
}

impl Warning {
    pub fn new(code: impl Into<String>, metadata: Vec<String>) -> Self {
        Self {
            code: code.into(),
            metadata,
        }
    }

    pub fn validation(messages: Vec<String>) -> Self {
        Self::new(WARNING_WSDL_VALIDATION_WARNINGS, messages)
    }
}
