//! ClientRepository port
//!
//! Loads and saves client aggregates. Every save replaces the whole
//! aggregate, so a client is never observed half-written.
//!
//! A load and the save built on it only form one step when the caller holds
//! the client's lease for the whole cycle (see [`ClientRepository::lock_client`]).

use std::fmt;
use std::path::PathBuf;

use crate::domain::entities::{Client, ServiceDescription};
use crate::domain::value_objects::{ClientId, DescriptionId};

pub type StoreResult<T> = Result<T, StoreError>;

pub trait ClientRepository: Send + Sync {
    fn load_client(&self, id: &ClientId) -> StoreResult<Option<Client>>;
    fn load_description(&self, id: DescriptionId) -> StoreResult<Option<ServiceDescription>>;
    fn save_client(&self, client: &Client) -> StoreResult<()>;
    fn next_description_id(&self) -> StoreResult<DescriptionId>;
    fn list_clients(&self) -> StoreResult<Vec<ClientId>>;

    /// Exclusive hold on one client's stored aggregate, across every handle
    /// on the same store. Released when the lease is dropped.
    ///
    /// Stores only reachable from one process can rely on the engine's own
    /// per-client locks and keep the default.
    fn lock_client(&self, _id: &ClientId) -> StoreResult<ClientLease> {
        Ok(ClientLease::unguarded())
    }
}

/// A held store lock. Dropping it releases the lock.
#[must_use = "the client is unlocked as soon as the lease is dropped"]
pub struct ClientLease {
    held: Option<Box<dyn Send>>,
}

impl ClientLease {
    pub fn unguarded() -> Self {
        Self { held: None }
    }

    pub fn holding(guard: impl Send + 'static) -> Self {
        Self {
            held: Some(Box::new(guard)),
        }
    }

    pub fn is_guarded(&self) -> bool {
        self.held.is_some()
    }
}

impl fmt::Debug for ClientLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientLease")
            .field("guarded", &self.is_guarded())
            .finish()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to access store: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize store record: {message}")]
    SerializationError { message: String },

    #[error(
        "store file corrupted: {path}\n  → Fix: restore the file from backup or remove it\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}

impl StoreError {
    pub fn access(err: impl std::fmt::Display) -> Self {
        StoreError::AccessError {
            message: err.to_string(),
        }
    }
}
