//! Common test utilities for descsync scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated store, config and catalog directories plus a CLI runner
//! - Fixtures: Reusable catalog documents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
