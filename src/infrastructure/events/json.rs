//! JSON Event Sink
//!
//! Outputs sync events as NDJSON for automation consumption.

use crate::domain::ports::{SyncEvent, SyncEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs one JSON object per line
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stderr, leaving stdout to
    /// command results
    pub fn stderr() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        let json = match event {
            SyncEvent::Started {
                action,
                client_id,
                url,
            } => {
                serde_json::json!({
                    "event": "start",
                    "action": action.as_str(),
                    "client": client_id.to_string(),
                    "url": url,
                })
            }

            SyncEvent::Parsed {
                url,
                operation_count,
            } => {
                serde_json::json!({
                    "event": "parsed",
                    "url": url,
                    "operations": operation_count,
                })
            }

            SyncEvent::ConflictsDetected {
                url,
                conflict_count,
            } => {
                serde_json::json!({
                    "event": "conflicts_detected",
                    "url": url,
                    "conflicts": conflict_count,
                })
            }

            SyncEvent::WarningsCollected { url, warning_count } => {
                serde_json::json!({
                    "event": "warnings_collected",
                    "url": url,
                    "warnings": warning_count,
                })
            }

            SyncEvent::Rejected { action, url, code } => {
                serde_json::json!({
                    "event": "rejected",
                    "action": action.as_str(),
                    "url": url,
                    "code": code,
                })
            }

            SyncEvent::Committed {
                action,
                client_id,
                description_id,
                added,
                removed,
            } => {
                serde_json::json!({
                    "event": "committed",
                    "action": action.as_str(),
                    "client": client_id.to_string(),
                    "description_id": description_id.value(),
                    "added": added,
                    "removed": removed,
                })
            }

            SyncEvent::Deleted {
                client_id,
                description_id,
            } => {
                serde_json::json!({
                    "event": "deleted",
                    "client": client_id.to_string(),
                    "description_id": description_id.value(),
                })
            }

            SyncEvent::Toggled {
                description_ids,
                enabled,
            } => {
                let ids: Vec<u64> = description_ids.iter().map(|id| id.value()).collect();
                serde_json::json!({
                    "event": if enabled { "enabled" } else { "disabled" },
                    "description_ids": ids,
                })
            }
        };

        self.write_event(json);
    }
}
