//! JSON Service Catalogs
//!
//! A catalog is a local JSON document listing the operations a provider
//! exposes:
//!
//! ```json
//! {"services": [{"code": "getUser", "version": "v1", "title": "Get user", "url": "http://backend/users"}]}
//! ```
//!
//! It stands in for a WSDL document wherever a reader or validator is needed.

mod reader;
mod validator;

pub use reader::JsonCatalogReader;
pub use validator::{StructuralValidator, ERROR_VALIDATION_FAILED};

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

use crate::domain::ports::ReadError;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CatalogDocument {
    #[serde(default)]
    pub services: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CatalogEntry {
    pub code: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
}

/// Resolve `locator` to a local file: a `file://` URL or a plain path.
fn catalog_path(locator: &str) -> Result<PathBuf, ReadError> {
    match Url::parse(locator) {
        Ok(url) if url.scheme() == "file" => {
            url.to_file_path().map_err(|_| ReadError::Unreachable {
                message: format!("'{}' is not a local file path", locator),
            })
        }
        Ok(url) => Err(ReadError::Unreachable {
            message: format!(
                "{} catalogs cannot be fetched, only local file:// catalogs are read",
                url.scheme()
            ),
        }),
        Err(_) => Ok(PathBuf::from(locator)),
    }
}

/// Load and parse the catalog behind `locator`.
pub(crate) fn load_catalog(locator: &str) -> Result<CatalogDocument, ReadError> {
    let path = catalog_path(locator)?;
    let content = fs::read_to_string(&path).map_err(|e| ReadError::Unreachable {
        message: match e.kind() {
            io::ErrorKind::NotFound => format!("{} not found", path.display()),
            _ => format!("{}: {}", path.display(), e),
        },
    })?;
    serde_json::from_str(&content).map_err(|e| ReadError::Parse {
        message: e.to_string(),
    })
}
