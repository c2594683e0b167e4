//! TOML Client Repository
//!
//! Persists one TOML file per client under `<root>/clients/` plus an
//! `<root>/index.toml` mapping description ids to their owning client.
//! Files are replaced atomically. A client's load-change-save cycle runs
//! under its `clients/<stem>.lock` file lock (see `lock_client`), so handles
//! in different processes see each other's commits.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Client, Operation, ServiceDescription};
use crate::domain::ports::{ClientLease, ClientRepository, StoreError, StoreResult};
use crate::domain::value_objects::{ClientId, DescriptionId, SourceKind};

const STORE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlIndex {
    version: u32,
    #[serde(default)]
    last_id: u64,
    #[serde(default)]
    descriptions: BTreeMap<String, ClientId>,
}

impl Default for TomlIndex {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            last_id: 0,
            descriptions: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlClient {
    version: u32,
    id: ClientId,
    #[serde(default)]
    descriptions: Vec<TomlDescription>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlDescription {
    id: DescriptionId,
    #[serde(default)]
    kind: SourceKind,
    url: String,
    disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    disabled_notice: Option<String>,
    refreshed_at: DateTime<Utc>,
    #[serde(default)]
    services: Vec<TomlService>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlService {
    code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    url: String,
    timeout: u32,
}

pub struct TomlClientRepository {
    root: PathBuf,
}

impl TomlClientRepository {
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn clients_dir(&self) -> PathBuf {
        self.root.join("clients")
    }

    fn client_path(&self, id: &ClientId) -> PathBuf {
        self.clients_dir()
            .join(format!("{}.toml", client_file_stem(id)))
    }

    fn client_lock_path(&self, id: &ClientId) -> PathBuf {
        self.client_path(id).with_extension("lock")
    }

    fn index_path(&self) -> PathBuf {
        self.root.join("index.toml")
    }

    fn read_index(&self) -> StoreResult<TomlIndex> {
        let path = self.index_path();
        if !path.exists() {
            return Ok(TomlIndex::default());
        }
        read_toml(&path)
    }

    fn read_client(&self, id: &ClientId) -> StoreResult<Option<Client>> {
        let path = self.client_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let stored: TomlClient = read_toml(&path)?;
        Ok(Some(from_toml(stored)))
    }

    /// Write a client file and point the index at its descriptions.
    fn write_client(&self, client: &Client) -> StoreResult<()> {
        write_toml(&self.client_path(&client.id), &to_toml(client))?;

        with_file_lock(&self.index_path().with_extension("lock"), || {
            let mut index = self.read_index()?;
            index.descriptions.retain(|_, owner| *owner != client.id);
            for description in client.descriptions() {
                index
                    .descriptions
                    .insert(description.id.to_string(), client.id.clone());
            }
            write_toml(&self.index_path(), &index)
        })
    }
}

impl ClientRepository for TomlClientRepository {
    fn load_client(&self, id: &ClientId) -> StoreResult<Option<Client>> {
        self.read_client(id)
    }

    fn load_description(&self, id: DescriptionId) -> StoreResult<Option<ServiceDescription>> {
        let index = self.read_index()?;
        let Some(owner) = index.descriptions.get(&id.to_string()) else {
            return Ok(None);
        };
        Ok(self
            .read_client(owner)?
            .and_then(|client| client.description(id).cloned()))
    }

    /// Callers that loaded `client` first hold its lease from `lock_client`.
    fn save_client(&self, client: &Client) -> StoreResult<()> {
        self.write_client(client)
    }

    fn next_description_id(&self) -> StoreResult<DescriptionId> {
        with_file_lock(&self.index_path().with_extension("lock"), || {
            let mut index = self.read_index()?;
            index.last_id += 1;
            write_toml(&self.index_path(), &index)?;
            Ok(DescriptionId(index.last_id))
        })
    }

    fn list_clients(&self) -> StoreResult<Vec<ClientId>> {
        let dir = self.clients_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&dir).map_err(StoreError::access)? {
            let path = entry.map_err(StoreError::access)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let stored: TomlClient = read_toml(&path)?;
            ids.push(stored.id);
        }
        ids.sort();
        Ok(ids)
    }

    fn lock_client(&self, id: &ClientId) -> StoreResult<ClientLease> {
        let lock = FileLock::acquire(&self.client_lock_path(id))?;
        Ok(ClientLease::holding(lock))
    }
}

/// File-name-safe, reversible encoding of a client id.
fn client_file_stem(id: &ClientId) -> String {
    let mut stem = String::new();
    for byte in id.to_string().bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("%{:02X}", byte));
        }
    }
    stem
}

/// Exclusive `fs2` lock on a file, released on drop.
struct FileLock {
    file: fs::File,
}

impl FileLock {
    fn acquire(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::access)?;
        }
        let file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)
            .map_err(StoreError::access)?;
        file.lock_exclusive().map_err(StoreError::access)?;
        Ok(Self { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

fn with_file_lock<T>(lock_path: &Path, f: impl FnOnce() -> StoreResult<T>) -> StoreResult<T> {
    let _lock = FileLock::acquire(lock_path)?;
    f()
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> StoreResult<T> {
    let content = fs::read_to_string(path).map_err(StoreError::access)?;
    toml::from_str(&content).map_err(|e| StoreError::Corrupted {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn write_toml<T: Serialize>(path: &Path, value: &T) -> StoreResult<()> {
    let content =
        toml::to_string_pretty(value).map_err(|e| StoreError::SerializationError {
            message: e.to_string(),
        })?;

    let dir = path
        .parent()
        .ok_or_else(|| StoreError::access(format!("{} has no parent", path.display())))?;
    fs::create_dir_all(dir).map_err(StoreError::access)?;

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(StoreError::access)?;
    file.write_all(content.as_bytes())
        .map_err(StoreError::access)?;
    file.persist(path).map_err(StoreError::access)?;
    Ok(())
}

fn from_toml(stored: TomlClient) -> Client {
    let client_id = stored.id;
    let descriptions = stored
        .descriptions
        .into_iter()
        .map(|d| {
            ServiceDescription::restore(
                d.id,
                client_id.clone(),
                d.kind,
                d.url,
                d.disabled,
                d.disabled_notice,
                d.refreshed_at,
                d.services
                    .into_iter()
                    .map(|s| Operation {
                        code: s.code,
                        version: s.version,
                        title: s.title,
                        url: s.url,
                        timeout: s.timeout,
                    })
                    .collect(),
            )
        })
        .collect();
    Client::with_descriptions(client_id, descriptions)
}

fn to_toml(client: &Client) -> TomlClient {
    TomlClient {
        version: STORE_VERSION,
        id: client.id.clone(),
        descriptions: client
            .descriptions()
            .iter()
            .map(|d| TomlDescription {
                id: d.id,
                kind: d.kind,
                url: d.url.clone(),
                disabled: d.disabled,
                disabled_notice: d.disabled_notice.clone(),
                refreshed_at: d.refreshed_at,
                services: d
                    .operations()
                    .iter()
                    .map(|op| TomlService {
                        code: op.code.clone(),
                        version: op.version.clone(),
                        title: op.title.clone(),
                        url: op.url.clone(),
                        timeout: op.timeout,
                    })
                    .collect(),
            })
            .collect(),
    }
}
