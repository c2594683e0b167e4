//! Per-client serialization
//!
//! Synchronization calls against one client run one at a time; calls against
//! different clients never wait on each other.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::value_objects::ClientId;

#[derive(Debug, Default)]
pub struct ClientLocks {
    locks: Mutex<HashMap<ClientId, Arc<Mutex<()>>>>,
}

impl ClientLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lock guarding `client_id`, created on first use.
    pub fn handle(&self, client_id: &ClientId) -> Arc<Mutex<()>> {
        let mut locks = lock_unpoisoned(&self.locks);
        locks
            .entry(client_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Run `f` while holding the lock for `client_id`.
    pub fn with_lock<T>(&self, client_id: &ClientId, f: impl FnOnce() -> T) -> T {
        let handle = self.handle(client_id);
        let _guard = lock_unpoisoned(&handle);
        f()
    }

    /// Run `f` while holding the locks of every client in `client_ids`.
    ///
    /// Locks are taken in `ClientId` order so two multi-client calls cannot
    /// deadlock each other.
    pub fn with_locks<'a, T>(
        &self,
        client_ids: impl IntoIterator<Item = &'a ClientId>,
        f: impl FnOnce() -> T,
    ) -> T {
        let ordered: BTreeSet<&ClientId> = client_ids.into_iter().collect();
        let handles: Vec<Arc<Mutex<()>>> = ordered.into_iter().map(|id| self.handle(id)).collect();
        let _guards: Vec<MutexGuard<'_, ()>> = handles.iter().map(|h| lock_unpoisoned(h)).collect();
        f()
    }
}

/// A panic inside a previous holder leaves no partial state behind (nothing
/// is written before the final save), so a poisoned lock is still usable.
fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
