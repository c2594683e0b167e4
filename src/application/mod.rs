//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ServiceDescriptionUseCase` - Register, update, refresh, delete,
//!   enable and disable service descriptions

mod locks;
pub mod service_description;

pub use locks::ClientLocks;
pub use service_description::{ServiceDescriptionUseCase, SyncOptions, SyncOutcome};
