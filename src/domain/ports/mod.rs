//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod authorization;
pub mod client_repository;
pub mod clock;
pub mod description_reader;
pub mod description_validator;
pub mod sync_events;

pub use authorization::{AllowAll, AuthorizationGate, PermissionDenied};
pub use client_repository::{ClientLease, ClientRepository, StoreError, StoreResult};
pub use clock::{Clock, SystemClock};
pub use description_reader::{DescriptionReader, ParsedOperation, ReadError};
pub use description_validator::{DescriptionValidator, ValidationError};
pub use sync_events::{NoopEventSink, SyncAction, SyncEvent, SyncEventSink};
