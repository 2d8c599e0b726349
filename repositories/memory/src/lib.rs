pub mod client;

use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};
use types::client::{Client, ClientId};

/// Process-local store. Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

struct State {
    clients: BTreeMap<ClientId, Client>,
    next_id: i32,
}

impl Default for State {
    fn default() -> Self {
        State {
            clients: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory store lock poisoned"))
    }
}
