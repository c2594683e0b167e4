//! descsync - service description synchronization engine
//!
//! Keeps each client's catalog of callable operations consistent with the
//! external description documents (WSDL and friends) it was built from:
//! register, re-point and refresh descriptions while rejecting duplicate
//! sources and operation name collisions, and reporting every added or
//! removed operation as a warning the caller must acknowledge.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{ServiceDescriptionUseCase, SyncOptions, SyncOutcome};
pub use config::Config;
pub use domain::entities::{Client, Operation, ServiceDescription};
pub use domain::value_objects::{ClientId, DescriptionId, FullName, Warning};
pub use error::{ErrorKind, Rejection, SyncError, SyncResult};
