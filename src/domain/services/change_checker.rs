//! Change Checker Domain Service
//!
//! Compares the operation list a description has now with the list a new
//! source would give it. The result only feeds warnings.

use std::collections::BTreeSet;

use crate::domain::entities::Operation;
use crate::domain::value_objects::{
    FullName, Warning, WARNING_ADDING_SERVICES, WARNING_DELETING_SERVICES,
};

/// Full names added and removed between two operation lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub added: BTreeSet<FullName>,
    pub removed: BTreeSet<FullName>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    pub fn added_names(&self) -> Vec<String> {
        self.added.iter().map(|n| n.as_str().to_string()).collect()
    }

    pub fn removed_names(&self) -> Vec<String> {
        self.removed.iter().map(|n| n.as_str().to_string()).collect()
    }

    /// `adding services` then `deleting services`, each only when non-empty.
    pub fn to_warnings(&self) -> Vec<Warning> {
        let mut warnings = Vec::new();
        if !self.added.is_empty() {
            warnings.push(Warning::new(WARNING_ADDING_SERVICES, self.added_names()));
        }
        if !self.removed.is_empty() {
            warnings.push(Warning::new(WARNING_DELETING_SERVICES, self.removed_names()));
        }
        warnings
    }

    /// Get a summary (e.g., "+2, -1")
    pub fn summary(&self) -> String {
        format!("+{}, -{}", self.added.len(), self.removed.len())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeChecker;

impl ChangeChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, previous: &[Operation], candidates: &[Operation]) -> ChangeSet {
        let before: BTreeSet<FullName> = previous.iter().map(Operation::full_name).collect();
        let after: BTreeSet<FullName> = candidates.iter().map(Operation::full_name).collect();

        ChangeSet {
            added: after.difference(&before).cloned().collect(),
            removed: before.difference(&after).cloned().collect(),
        }
    }
}
