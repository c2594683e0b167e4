//! Authorization gate port
//!
//! Every engine entry point declares the capability it needs. The gate is
//! asked before anything is loaded, parsed or written.

use crate::domain::value_objects::Capability;

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
#[error("permission denied: missing capability '{capability}'")]
pub struct PermissionDenied {
    pub capability: Capability,
}

pub trait AuthorizationGate: Send + Sync {
    fn check(&self, capability: Capability) -> Result<(), PermissionDenied>;
}

/// Gate that grants every capability.
pub struct AllowAll;

impl AuthorizationGate for AllowAll {
    fn check(&self, _capability: Capability) -> Result<(), PermissionDenied> {
        Ok(())
    }
}
