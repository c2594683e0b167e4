//! Catalog reader

use tracing::debug;

use super::load_catalog;
use crate::domain::ports::{DescriptionReader, ParsedOperation, ReadError};

/// Reads operations from a local JSON catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCatalogReader;

impl JsonCatalogReader {
    pub fn new() -> Self {
        Self
    }
}

impl DescriptionReader for JsonCatalogReader {
    fn read(&self, locator: &str) -> Result<Vec<ParsedOperation>, ReadError> {
        let document = load_catalog(locator)?;
        debug!(locator, services = document.services.len(), "catalog read");

        Ok(document
            .services
            .into_iter()
            .map(|entry| ParsedOperation {
                code: entry.code,
                version: entry.version.filter(|v| !v.is_empty()),
                title: entry.title,
                url: entry.url,
            })
            .collect())
    }
}
