//! Client identifier value object.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Composite identifier of a client: a member, optionally narrowed to one of
/// its subsystems.
///
/// Rendered as `INSTANCE:CLASS:CODE` or `INSTANCE:CLASS:CODE:SUBSYSTEM`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientId {
    pub instance: String,
    pub member_class: String,
    pub member_code: String,
    pub subsystem_code: Option<String>,
}

impl ClientId {
    pub fn member(instance: &str, member_class: &str, member_code: &str) -> Self {
        Self {
            instance: instance.to_string(),
            member_class: member_class.to_string(),
            member_code: member_code.to_string(),
            subsystem_code: None,
        }
    }

    pub fn subsystem(
        instance: &str,
        member_class: &str,
        member_code: &str,
        subsystem_code: &str,
    ) -> Self {
        Self {
            subsystem_code: Some(subsystem_code.to_string()),
            ..Self::member(instance, member_class, member_code)
        }
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.instance, self.member_class, self.member_code
        )?;
        if let Some(subsystem) = &self.subsystem_code {
            write!(f, ":{}", subsystem)?;
        }
        Ok(())
    }
}

/// Error returned when a client identifier string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid client id '{value}': expected INSTANCE:CLASS:CODE[:SUBSYSTEM]")]
pub struct ClientIdParseError {
    pub value: String,
}

impl FromStr for ClientId {
    type Err = ClientIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.iter().any(|p| p.trim().is_empty()) {
            return Err(ClientIdParseError {
                value: s.to_string(),
            });
        }
        match parts.as_slice() {
            [instance, class, code] => Ok(Self::member(instance, class, code)),
            [instance, class, code, subsystem] => {
                Ok(Self::subsystem(instance, class, code, subsystem))
            }
            _ => Err(ClientIdParseError {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ClientId {
    type Error = ClientIdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClientId> for String {
    fn from(value: ClientId) -> Self {
        value.to_string()
    }
}
