//! Domain Entities
//!
//! - `Client` - Aggregate root owning service descriptions
//! - `ServiceDescription` - Catalog entry pointing at one external source
//! - `Operation` - One callable service declared by a description

mod client;
mod operation;
mod service_description;

pub use client::Client;
pub use operation::{Operation, DEFAULT_SERVICE_TIMEOUT};
pub use service_description::{ServiceDescription, DEFAULT_DISABLED_NOTICE};
