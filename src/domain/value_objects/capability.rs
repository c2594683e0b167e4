//! Capabilities checked by the authorization gate.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ViewDescription,
    AddDescription,
    EditDescription,
    RefreshDescription,
    DeleteDescription,
    EnableDisableDescription,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::ViewDescription,
        Capability::AddDescription,
        Capability::EditDescription,
        Capability::RefreshDescription,
        Capability::DeleteDescription,
        Capability::EnableDisableDescription,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Capability::ViewDescription => "view_description",
            Capability::AddDescription => "add_description",
            Capability::EditDescription => "edit_description",
            Capability::RefreshDescription => "refresh_description",
            Capability::DeleteDescription => "delete_description",
            Capability::EnableDisableDescription => "enable_disable_description",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
