//! Operation entity
//!
//! One callable unit declared by a service description (a "service").

use crate::domain::value_objects::FullName;

/// Timeout assigned to operations that do not declare one, in seconds.
pub const DEFAULT_SERVICE_TIMEOUT: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub code: String,
    pub version: Option<String>,
    pub title: Option<String>,
    pub url: String,
    pub timeout: u32,
}

impl Operation {
    pub fn new(code: &str, version: Option<&str>, url: &str) -> Self {
        Self {
            code: code.to_string(),
            version: version.map(str::to_string),
            title: None,
            url: url.to_string(),
            timeout: DEFAULT_SERVICE_TIMEOUT,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_timeout(mut self, timeout: u32) -> Self {
        self.timeout = timeout;
        self
    }

    /// Case-insensitive identity of this operation.
    pub fn full_name(&self) -> FullName {
        FullName::new(&self.code, self.version.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_operation_uses_default_timeout() {
        let op = Operation::new("getUser", Some("v1"), "http://backend/users");
        assert_eq!(op.timeout, DEFAULT_SERVICE_TIMEOUT);
        assert_eq!(op.full_name().as_str(), "getUser.v1");
    }

    #[test]
    fn builder_sets_title_and_timeout() {
        let op = Operation::new("ping", None, "http://backend")
            .with_title("Ping")
            .with_timeout(5);
        assert_eq!(op.title.as_deref(), Some("Ping"));
        assert_eq!(op.timeout, 5);
        assert_eq!(op.full_name().as_str(), "ping");
    }
}
