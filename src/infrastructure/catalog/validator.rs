//! Structural catalog validator

use std::collections::BTreeSet;

use super::load_catalog;
use crate::domain::ports::{DescriptionValidator, ValidationError};
use crate::domain::value_objects::FullName;

/// Code reported when a catalog cannot be validated at all.
pub const ERROR_VALIDATION_FAILED: &str = "clients.wsdl_validation_failed";

/// Flags catalog entries that would register but look wrong: missing titles,
/// non-HTTP invocation URLs and repeated full names.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralValidator;

impl StructuralValidator {
    pub fn new() -> Self {
        Self
    }
}

impl DescriptionValidator for StructuralValidator {
    fn validate(&self, locator: &str) -> Result<Vec<String>, ValidationError> {
        let document = load_catalog(locator).map_err(|e| ValidationError {
            code: ERROR_VALIDATION_FAILED.to_string(),
            message: e.to_string(),
            warnings: Vec::new(),
        })?;

        let mut findings = Vec::new();
        let mut seen = BTreeSet::new();

        for entry in &document.services {
            let name = FullName::new(&entry.code, entry.version.as_deref());

            if entry.title.as_deref().map_or(true, |t| t.trim().is_empty()) {
                findings.push(format!("service '{}' has no title", name));
            }
            if !(entry.url.starts_with("http://") || entry.url.starts_with("https://")) {
                findings.push(format!(
                    "service '{}' has non-HTTP address '{}'",
                    name, entry.url
                ));
            }
            if !seen.insert(name.clone()) {
                findings.push(format!("service '{}' is declared more than once", name));
            }
        }

        Ok(findings)
    }
}
