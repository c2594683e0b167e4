//! Service description entity
//!
//! A catalog entry pointing at one external operation source. Owned by
//! exactly one client; the owner is recorded by id only.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{same_source, ClientId, DescriptionId, SourceKind};

use super::Operation;

/// Notice attached to newly registered descriptions, which start disabled.
pub const DEFAULT_DISABLED_NOTICE: &str = "Out of order";

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDescription {
    pub id: DescriptionId,
    pub client_id: ClientId,
    pub kind: SourceKind,
    pub url: String,
    pub disabled: bool,
    pub disabled_notice: Option<String>,
    pub refreshed_at: DateTime<Utc>,
    operations: Vec<Operation>,
}

impl ServiceDescription {
    /// A freshly registered WSDL description: disabled, carrying `notice`.
    pub fn new_wsdl(
        id: DescriptionId,
        client_id: ClientId,
        url: &str,
        notice: &str,
        refreshed_at: DateTime<Utc>,
        operations: Vec<Operation>,
    ) -> Self {
        Self {
            id,
            client_id,
            kind: SourceKind::Wsdl,
            url: url.to_string(),
            disabled: true,
            disabled_notice: Some(notice.to_string()),
            refreshed_at,
            operations,
        }
    }

    /// Rebuild a description from stored state.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: DescriptionId,
        client_id: ClientId,
        kind: SourceKind,
        url: String,
        disabled: bool,
        disabled_notice: Option<String>,
        refreshed_at: DateTime<Utc>,
        operations: Vec<Operation>,
    ) -> Self {
        Self {
            id,
            client_id,
            kind,
            url,
            disabled,
            disabled_notice,
            refreshed_at,
            operations,
        }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn has_source(&self, url: &str) -> bool {
        same_source(&self.url, url)
    }

    /// Swap in a new operation list in one step and stamp the refresh time.
    pub fn replace_operations(&mut self, operations: Vec<Operation>, refreshed_at: DateTime<Utc>) {
        self.operations = operations;
        self.refreshed_at = refreshed_at;
    }

    pub fn enable(&mut self) {
        self.disabled = false;
    }

    pub fn disable(&mut self, notice: Option<&str>) {
        self.disabled = true;
        self.disabled_notice = notice.map(str::to_string);
    }
}
