use crate::MemoryStore;
use repositories::client::ClientRepository;
use types::client::{Client, ClientId};

impl ClientRepository for MemoryStore {
    async fn find_all(&self) -> anyhow::Result<Vec<Client>> {
        Ok(self.lock()?.clients.values().cloned().collect())
    }

    async fn find(&self, client_id: ClientId) -> anyhow::Result<Option<Client>> {
        let res = self.lock()?.clients.get(&client_id).cloned();
        tracing::debug!("Find client by id '{}' result: {:?}", client_id, res);
        Ok(res)
    }

    async fn insert(&self, client: Client) -> anyhow::Result<Client> {
        let mut state = self.lock()?;
        let client_id = ClientId::from(state.next_id);
        state.next_id = state
            .next_id
            .checked_add(1)
            .ok_or_else(|| anyhow::anyhow!("Client identifiers exhausted"))?;

        let client = client.with_id(client_id);
        state.clients.insert(client_id, client.clone());
        tracing::debug!("Inserted client: {:?}", client);
        Ok(client)
    }

    async fn update(&self, client_id: ClientId, client: Client) -> anyhow::Result<Option<Client>> {
        let mut state = self.lock()?;
        let res = state.clients.get_mut(&client_id).map(|stored| {
            *stored = client.with_id(client_id);
            stored.clone()
        });
        tracing::debug!("Update client '{}' result: {:?}", client_id, res);
        Ok(res)
    }

    async fn delete(&self, client_id: ClientId) -> anyhow::Result<bool> {
        Ok(self.lock()?.clients.remove(&client_id).is_some())
    }
}
