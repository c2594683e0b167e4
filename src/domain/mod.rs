//! Domain Layer
//!
//! Pure business logic for managing service descriptions, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Client aggregate, ServiceDescription, Operation
//! - `value_objects/` - Immutable value types (ClientId, FullName, Warning)
//! - `services/` - Domain services (ConflictDetector, ChangeChecker)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
