//! Use Case Factory
//!
//! Creates the use case with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ServiceDescriptionUseCase;
use crate::config::Config;
use crate::domain::ports::{ClientRepository, NoopEventSink, SyncEventSink};
use crate::infrastructure::{JsonCatalogReader, JsonEventSink, StructuralValidator, TomlClientRepository};

/// Store root: the `--store` flag, else the configured or default path.
pub fn store_root(config: &Config, flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| config.store.resolved_path())
}

pub fn create_repository(root: PathBuf) -> Arc<dyn ClientRepository> {
    Arc::new(TomlClientRepository::with_root(root))
}

/// Create the use case over `repository`, reading JSON catalogs.
///
/// With `json_events` set, sync events are streamed to stderr as NDJSON.
pub fn create_use_case(
    repository: Arc<dyn ClientRepository>,
    config: &Config,
    json_events: bool,
) -> ServiceDescriptionUseCase {
    let events: Arc<dyn SyncEventSink> = if json_events {
        Arc::new(JsonEventSink::stderr())
    } else {
        Arc::new(NoopEventSink)
    };

    ServiceDescriptionUseCase::new(
        repository,
        Arc::new(JsonCatalogReader::new()),
        Arc::new(StructuralValidator::new()),
    )
    .with_options(config.sync.options())
    .with_events(events)
}
