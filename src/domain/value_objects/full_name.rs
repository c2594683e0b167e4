//! Operation identity
//!
//! An operation is identified by its code and optional version, joined with
//! [`VERSION_SEPARATOR`]. Identity comparison is case-insensitive: `getUser.v1`
//! and `GETUSER.V1` name the same operation.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Separator placed between an operation code and its version.
pub const VERSION_SEPARATOR: char = '.';

/// Case-insensitive full name of an operation.
///
/// Keeps the name as it was declared for display, while equality, ordering
/// and hashing go through a lowercase key.
#[derive(Debug, Clone)]
pub struct FullName {
    display: String,
    key: String,
}

impl FullName {
    /// Compose a full name from a code and an optional version.
    ///
    /// An empty version is treated the same as a missing one.
    pub fn new(code: &str, version: Option<&str>) -> Self {
        let display = match version {
            Some(version) if !version.is_empty() => {
                format!("{}{}{}", code, VERSION_SEPARATOR, version)
            }
            _ => code.to_string(),
        };
        Self::from_display(display)
    }

    fn from_display(display: String) -> Self {
        let key = display.to_lowercase();
        Self { display, key }
    }

    /// The name as declared.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Normalized comparison key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Case-insensitive comparison against a raw string.
    pub fn matches(&self, other: &str) -> bool {
        self.key == other.to_lowercase()
    }
}

impl PartialEq for FullName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FullName {}

impl Hash for FullName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for FullName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FullName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl From<&str> for FullName {
    fn from(value: &str) -> Self {
        Self::from_display(value.to_string())
    }
}
