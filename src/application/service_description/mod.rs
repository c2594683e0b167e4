//! Service Description Use Case
//!
//! Register, update, refresh, delete, enable and disable service
//! descriptions while keeping each client's operation catalog consistent.

mod options;
mod result;
mod use_case;


pub use options::SyncOptions;
pub use result::SyncOutcome;
pub use use_case::ServiceDescriptionUseCase;
