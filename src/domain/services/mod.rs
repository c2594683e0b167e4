//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are safe to share between
//! threads.

mod change_checker;
mod conflict_detector;

pub use change_checker::{ChangeChecker, ChangeSet};
pub use conflict_detector::{ConflictDetector, ConflictScope, ConflictedOperation};
