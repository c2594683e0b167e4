//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the use case with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Wires the use case to the TOML store and JSON catalogs
//! - `commands` - Subcommand handlers
//! - `output` - Output rendering

pub mod cli;
pub mod commands;
pub mod factory;
pub mod output;

pub use cli::{Cli, ClientCommands, Commands};
pub use commands::run;
