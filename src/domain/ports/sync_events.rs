//! Sync Event Port
//!
//! Provides an observable interface for synchronization operations.
//! Enables progress reporting, JSON event streams, and debugging.

use crate::domain::value_objects::{ClientId, DescriptionId};

/// Which engine entry point produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Register,
    UpdateSource,
    Refresh,
}

impl SyncAction {
    pub fn as_str(self) -> &'static str {
        match self {
            SyncAction::Register => "register",
            SyncAction::UpdateSource => "update_source",
            SyncAction::Refresh => "refresh",
        }
    }
}

/// Event emitted during synchronization operations
#[derive(Debug, Clone)]
pub enum SyncEvent {
    /// Synchronization started for a source
    Started {
        action: SyncAction,
        client_id: ClientId,
        url: String,
    },

    /// Source was parsed into candidate operations
    Parsed { url: String, operation_count: usize },

    /// Candidate operations collide with sibling descriptions
    ConflictsDetected { url: String, conflict_count: usize },

    /// Acknowledgeable warnings were collected
    WarningsCollected { url: String, warning_count: usize },

    /// The operation was rejected and nothing was written
    Rejected {
        action: SyncAction,
        url: String,
        code: String,
    },

    /// A description was committed
    Committed {
        action: SyncAction,
        client_id: ClientId,
        description_id: DescriptionId,
        added: usize,
        removed: usize,
    },

    /// A description was deleted
    Deleted {
        client_id: ClientId,
        description_id: DescriptionId,
    },

    /// Descriptions were enabled or disabled
    Toggled {
        description_ids: Vec<DescriptionId>,
        enabled: bool,
    },
}

/// Trait for receiving sync events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream for automation
/// - NoopEventSink: Silent operation
pub trait SyncEventSink: Send + Sync {
    fn on_event(&self, event: SyncEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {}
}
