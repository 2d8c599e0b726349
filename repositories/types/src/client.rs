use types::client::{Client, ClientId};

/// Persistence of client records keyed by a store-assigned identifier.
///
/// Implementations must never hand out an identifier twice, including identifiers
/// of deleted clients. Listing order is by identifier.
pub trait ClientRepository: Send + Sync {
    fn find_all(&self) -> impl std::future::Future<Output = anyhow::Result<Vec<Client>>> + Send;
    fn find(
        &self,
        client_id: ClientId,
    ) -> impl std::future::Future<Output = anyhow::Result<Option<Client>>> + Send;
    /// Stores `client` under a freshly assigned identifier. Any `id` it carries is ignored.
    fn insert(
        &self,
        client: Client,
    ) -> impl std::future::Future<Output = anyhow::Result<Client>> + Send;
    /// Replaces every field of the stored client. `None` when no client has `client_id`.
    fn update(
        &self,
        client_id: ClientId,
        client: Client,
    ) -> impl std::future::Future<Output = anyhow::Result<Option<Client>>> + Send;
    /// Returns `false` when there was nothing to delete.
    fn delete(
        &self,
        client_id: ClientId,
    ) -> impl std::future::Future<Output = anyhow::Result<bool>> + Send;
    fn save(
        &self,
        client: Client,
    ) -> impl std::future::Future<Output = anyhow::Result<Option<Client>>> + Send {
        async move {
            let client_id = client.id;
            match client_id {
                None => self.insert(client).await.map(Some),
                Some(client_id) => self.update(client_id, client).await,
            }
        }
    }
}
