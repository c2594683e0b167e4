//! In-memory Client Repository
//!
//! Keeps client aggregates in a map behind a mutex. Used by tests and by
//! embedders that manage persistence themselves.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::entities::{Client, ServiceDescription};
use crate::domain::ports::{ClientRepository, StoreError, StoreResult};
use crate::domain::value_objects::{ClientId, DescriptionId};

#[derive(Debug, Default)]
struct MemoryState {
    clients: BTreeMap<ClientId, Client>,
    last_id: u64,
}

#[derive(Debug, Default)]
pub struct InMemoryClientRepository {
    state: Mutex<MemoryState>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store; id allocation continues after the highest seeded id.
    pub fn with_clients(clients: impl IntoIterator<Item = Client>) -> Self {
        let mut state = MemoryState::default();
        for client in clients {
            let highest = client.descriptions().iter().map(|d| d.id.value()).max();
            state.last_id = state.last_id.max(highest.unwrap_or(0));
            state.clients.insert(client.id.clone(), client);
        }
        Self {
            state: Mutex::new(state),
        }
    }

    fn state(&self) -> StoreResult<std::sync::MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| StoreError::access("in-memory store lock poisoned"))
    }
}

impl ClientRepository for InMemoryClientRepository {
    fn load_client(&self, id: &ClientId) -> StoreResult<Option<Client>> {
        Ok(self.state()?.clients.get(id).cloned())
    }

    fn load_description(&self, id: DescriptionId) -> StoreResult<Option<ServiceDescription>> {
        Ok(self
            .state()?
            .clients
            .values()
            .find_map(|client| client.description(id).cloned()))
    }

    fn save_client(&self, client: &Client) -> StoreResult<()> {
        self.state()?
            .clients
            .insert(client.id.clone(), client.clone());
        Ok(())
    }

    fn next_description_id(&self) -> StoreResult<DescriptionId> {
        let mut state = self.state()?;
        state.last_id += 1;
        Ok(DescriptionId(state.last_id))
    }

    fn list_clients(&self) -> StoreResult<Vec<ClientId>> {
        Ok(self.state()?.clients.keys().cloned().collect())
    }
}
