//! Repository Implementations
//!
//! Concrete implementations of the client repository port.

mod memory;
mod toml_client;

pub use memory::InMemoryClientRepository;
pub use toml_client::TomlClientRepository;
