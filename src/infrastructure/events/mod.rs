//! Event Sink Implementations
//!
//! Concrete implementations of SyncEventSink:
//! - JsonEventSink: NDJSON output for automation

mod json;

pub use json::JsonEventSink;
