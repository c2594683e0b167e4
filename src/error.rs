//! Error types for descsync
//!
//! Uses `thiserror` for library errors. Every engine failure maps to an
//! [`ErrorKind`] and a stable error code, and can be turned into a
//! serializable [`Rejection`] for whatever transport sits on top.

use serde::Serialize;
use thiserror::Error;

use crate::domain::ports::{PermissionDenied, StoreError};
use crate::domain::services::ConflictedOperation;
use crate::domain::value_objects::{ClientId, DescriptionId, SourceKind, Warning};

/// Result type alias for engine operations
pub type SyncResult<T> = Result<T, SyncError>;

pub const ERROR_PERMISSION_DENIED: &str = "permission_denied";
pub const ERROR_CLIENT_NOT_FOUND: &str = "client_not_found";
pub const ERROR_DESCRIPTION_NOT_FOUND: &str = "service_description_not_found";
pub const ERROR_MALFORMED_URL: &str = "clients.malformed_wsdl_url";
pub const ERROR_WRONG_TYPE: &str = "clients.servicedescription_wrong_type";
pub const ERROR_INVALID_WSDL: &str = "clients.invalid_wsdl";
pub const ERROR_WSDL_DOWNLOAD_FAILED: &str = "clients.wsdl_download_failed";
pub const ERROR_WSDL_EXISTS: &str = "clients.wsdl_exists";
pub const ERROR_SERVICE_EXISTS: &str = "clients.service_exists";
pub const ERROR_WARNINGS_DETECTED: &str = "clients.warnings_detected";
pub const ERROR_NOT_IMPLEMENTED: &str = "not_implemented";
pub const ERROR_INTERNAL: &str = "internal_error";

/// Coarse classification of an engine failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Forbidden,
    NotFound,
    BadRequest,
    Conflict,
    WarningsDetected,
    Unimplemented,
    Internal,
}

/// Main error type for engine operations
#[derive(Error, Debug)]
pub enum SyncError {
    #[error(transparent)]
    PermissionDenied(#[from] PermissionDenied),

    #[error("client with id {client_id} not found")]
    ClientNotFound { client_id: ClientId },

    #[error("service descriptions with ids [{}] not found", join_ids(.ids))]
    DescriptionsNotFound { ids: Vec<DescriptionId> },

    #[error("malformed URL '{url}'")]
    MalformedUrl { url: String },

    /// Only WSDL descriptions can have their URL changed.
    #[error("existing service description (id: {id}) is not WSDL")]
    WrongType { id: DescriptionId },

    #[error("invalid WSDL at {url}: {message}")]
    InvalidWsdl { url: String, message: String },

    #[error("WSDL download failed for {url}: {message}")]
    WsdlDownloadFailed { url: String, message: String },

    #[error("WSDL validation failed ({code}): {message}")]
    WsdlValidationFailed {
        code: String,
        message: String,
        warnings: Vec<String>,
    },

    #[error("WSDL URL already exists: {url}")]
    SourceExists { url: String },

    #[error("services already exist: {}", describe_conflicts(.conflicts))]
    OperationExists { conflicts: Vec<ConflictedOperation> },

    #[error("warnings detected")]
    WarningsDetected { warnings: Vec<Warning> },

    #[error("{kind} service description refresh not implemented yet")]
    Unimplemented { kind: SourceKind },

    /// Store faults are passed through untranslated; nothing was committed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl SyncError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyncError::PermissionDenied(_) => ErrorKind::Forbidden,
            SyncError::ClientNotFound { .. } | SyncError::DescriptionsNotFound { .. } => {
                ErrorKind::NotFound
            }
            SyncError::MalformedUrl { .. }
            | SyncError::WrongType { .. }
            | SyncError::InvalidWsdl { .. }
            | SyncError::WsdlDownloadFailed { .. }
            | SyncError::WsdlValidationFailed { .. } => ErrorKind::BadRequest,
            SyncError::SourceExists { .. } | SyncError::OperationExists { .. } => {
                ErrorKind::Conflict
            }
            SyncError::WarningsDetected { .. } => ErrorKind::WarningsDetected,
            SyncError::Unimplemented { .. } => ErrorKind::Unimplemented,
            SyncError::Store(_) => ErrorKind::Internal,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            SyncError::PermissionDenied(_) => ERROR_PERMISSION_DENIED,
            SyncError::ClientNotFound { .. } => ERROR_CLIENT_NOT_FOUND,
            SyncError::DescriptionsNotFound { .. } => ERROR_DESCRIPTION_NOT_FOUND,
            SyncError::MalformedUrl { .. } => ERROR_MALFORMED_URL,
            SyncError::WrongType { .. } => ERROR_WRONG_TYPE,
            SyncError::InvalidWsdl { .. } => ERROR_INVALID_WSDL,
            SyncError::WsdlDownloadFailed { .. } => ERROR_WSDL_DOWNLOAD_FAILED,
            SyncError::WsdlValidationFailed { code, .. } => code,
            SyncError::SourceExists { .. } => ERROR_WSDL_EXISTS,
            SyncError::OperationExists { .. } => ERROR_SERVICE_EXISTS,
            SyncError::WarningsDetected { .. } => ERROR_WARNINGS_DETECTED,
            SyncError::Unimplemented { .. } => ERROR_NOT_IMPLEMENTED,
            SyncError::Store(_) => ERROR_INTERNAL,
        }
    }

    /// Identifiers, URLs or names that let the caller act on the failure.
    pub fn metadata(&self) -> Vec<String> {
        match self {
            SyncError::PermissionDenied(denied) => vec![denied.capability.to_string()],
            SyncError::ClientNotFound { client_id } => vec![client_id.to_string()],
            SyncError::DescriptionsNotFound { ids } => ids.iter().map(|id| id.to_string()).collect(),
            SyncError::MalformedUrl { url }
            | SyncError::InvalidWsdl { url, .. }
            | SyncError::WsdlDownloadFailed { url, .. }
            | SyncError::SourceExists { url } => vec![url.clone()],
            SyncError::WrongType { id } => vec![id.to_string()],
            SyncError::OperationExists { conflicts } => conflicts
                .iter()
                .flat_map(|c| [c.full_name.to_string(), c.source_url.clone()])
                .collect(),
            SyncError::Unimplemented { kind } => vec![kind.to_string()],
            SyncError::WsdlValidationFailed { .. }
            | SyncError::WarningsDetected { .. }
            | SyncError::Store(_) => Vec::new(),
        }
    }

    pub fn warnings(&self) -> Vec<Warning> {
        match self {
            SyncError::WarningsDetected { warnings } => warnings.clone(),
            SyncError::WsdlValidationFailed { warnings, .. } if !warnings.is_empty() => {
                vec![Warning::validation(warnings.clone())]
            }
            _ => Vec::new(),
        }
    }

    pub fn rejection(&self) -> Rejection {
        Rejection {
            kind: self.kind(),
            code: self.code().to_string(),
            message: self.to_string(),
            metadata: self.metadata(),
            warnings: self.warnings(),
        }
    }
}

/// Transport-agnostic form of a failed engine call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub kind: ErrorKind,
    pub code: String,
    pub message: String,
    pub metadata: Vec<String>,
    pub warnings: Vec<Warning>,
}

fn join_ids(ids: &[DescriptionId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_conflicts(conflicts: &[ConflictedOperation]) -> String {
    conflicts
        .iter()
        .map(|c| format!("{} ({})", c.full_name, c.source_url))
        .collect::<Vec<_>>()
        .join(", ")
}
