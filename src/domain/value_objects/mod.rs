//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod capability;
mod client_id;
mod description_id;
mod full_name;
mod source_kind;
mod source_url;
mod warning;

pub use capability::Capability;
pub use client_id::{ClientId, ClientIdParseError};
pub use description_id::DescriptionId;
pub use full_name::{FullName, VERSION_SEPARATOR};
pub use source_kind::SourceKind;
pub use source_url::{is_valid_source_url, same_source, SUPPORTED_SCHEMES};
pub use warning::{
    Warning, WARNING_ADDING_SERVICES, WARNING_DELETING_SERVICES, WARNING_WSDL_VALIDATION_WARNINGS,
};
