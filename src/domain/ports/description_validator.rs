//! DescriptionValidator port
//!
//! Runs structural checks against an external description. Findings are
//! returned as plain warnings; the validator itself never decides whether
//! they block a change.

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("description validation failed ({code}): {message}")]
pub struct ValidationError {
    pub code: String,
    pub message: String,
    pub warnings: Vec<String>,
}

pub trait DescriptionValidator: Send + Sync {
    fn validate(&self, locator: &str) -> Result<Vec<String>, ValidationError>;
}
