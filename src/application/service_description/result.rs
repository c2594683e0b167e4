//! Sync Result
//!
//! Result types for synchronization operations.

use crate::domain::entities::ServiceDescription;
use crate::domain::services::ChangeSet;
use crate::domain::value_objects::Warning;

/// A committed register, update or refresh.
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    /// The description as it was saved
    pub description: ServiceDescription,
    /// Operations added and removed by this commit
    pub changes: ChangeSet,
    /// Warnings the caller chose to ignore
    pub accepted_warnings: Vec<Warning>,
}

impl SyncOutcome {
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }
}
