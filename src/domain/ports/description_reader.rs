//! DescriptionReader port
//!
//! Fetches an external description and returns the operations it declares,
//! in declaration order.

/// One operation as declared by the external source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOperation {
    pub code: String,
    pub version: Option<String>,
    pub title: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ReadError {
    #[error("description could not be parsed: {message}")]
    Parse { message: String },

    #[error("description could not be fetched: {message}")]
    Unreachable { message: String },
}

pub trait DescriptionReader: Send + Sync {
    fn read(&self, locator: &str) -> Result<Vec<ParsedOperation>, ReadError>;
}
