//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Client stores (TOML files, in-memory)
//! - `catalog/` - JSON catalog reader and structural validator
//! - `events/` - Event sinks

pub mod catalog;
pub mod events;
pub mod repositories;

// Re-export for convenience
pub use catalog::{JsonCatalogReader, StructuralValidator};
pub use events::JsonEventSink;
pub use repositories::{InMemoryClientRepository, TomlClientRepository};
