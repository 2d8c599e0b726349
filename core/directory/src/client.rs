use repositories::client::ClientRepository;
use types::{
    client::{Client, ClientId},
    error::Error,
};

/// Single source of truth for client records.
///
/// A client without an identifier is created on [`upsert`](Self::upsert) and receives a new
/// identifier from the store. A client with an identifier fully replaces the stored one.
pub struct ClientDirectory<R> {
    repository: R,
}

impl<R: ClientRepository> ClientDirectory<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> Result<Vec<Client>, Error> {
        let clients = self.repository.find_all().await?;
        tracing::debug!("Listed {} clients", clients.len());
        Ok(clients)
    }

    pub async fn find_by_id(&self, client_id: ClientId) -> Result<Option<Client>, Error> {
        Ok(self.repository.find(client_id).await?)
    }

    pub async fn upsert(&self, client: Client) -> Result<Client, Error> {
        let client_id = client.id;
        match self.repository.save(client).await? {
            Some(stored) => {
                match client_id {
                    None => tracing::info!("Client created: {}", stored),
                    Some(_) => tracing::info!("Client replaced: {}", stored),
                }
                Ok(stored)
            }
            // Only a replace can miss.
            None => Err(client_id.map_or(Error::Unpersisted, Error::NotFound)),
        }
    }

    /// Deleting an identifier that is not stored leaves the store untouched and
    /// reports [`Error::NotFound`].
    pub async fn delete_by_id(&self, client_id: ClientId) -> Result<(), Error> {
        if self.repository.delete(client_id).await? {
            tracing::info!("Client {} deleted", client_id);
            Ok(())
        } else {
            tracing::warn!("Client {} not deleted: no such client", client_id);
            Err(Error::NotFound(client_id))
        }
    }

    pub async fn delete(&self, client: &Client) -> Result<(), Error> {
        let client_id = client.id.ok_or(Error::Unpersisted)?;
        self.delete_by_id(client_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memory_database::MemoryStore;

    fn directory() -> ClientDirectory<MemoryStore> {
        ClientDirectory::new(MemoryStore::new())
    }

    fn client(first_name: &str, last_name: &str, membership_number: i32) -> Client {
        Client::new(first_name.into(), last_name.into(), membership_number)
    }

    #[tokio::test]
    async fn lifecycle_of_a_single_client() {
        let directory = directory();

        let created = directory.upsert(client("Ana", "Lopez", 101)).await.unwrap();
        let client_id = ClientId::from(1);
        assert_eq!(created, client("Ana", "Lopez", 101).with_id(client_id));
        assert_eq!(
            directory.find_by_id(client_id).await.unwrap(),
            Some(created)
        );

        let replaced = directory
            .upsert(client("Ana", "Lopez", 202).with_id(client_id))
            .await
            .unwrap();
        assert_eq!(
            directory.find_by_id(client_id).await.unwrap(),
            Some(replaced)
        );
        assert_eq!(
            directory
                .find_by_id(client_id)
                .await
                .unwrap()
                .unwrap()
                .membership_number,
            202
        );

        directory.delete_by_id(client_id).await.unwrap();
        assert_eq!(directory.find_by_id(client_id).await.unwrap(), None);
        assert!(directory.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_is_not_idempotent() {
        let directory = directory();
        let first = directory.upsert(client("Ana", "Lopez", 101)).await.unwrap();
        let second = directory.upsert(client("Ana", "Lopez", 101)).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(directory.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn replace_is_idempotent_and_not_a_merge() {
        let directory = directory();
        let client_id = directory
            .upsert(client("Ana", "Lopez", 101))
            .await
            .unwrap()
            .id
            .unwrap();

        let replacement = client("Bea", "", 300).with_id(client_id);
        directory.upsert(replacement.clone()).await.unwrap();
        directory.upsert(replacement.clone()).await.unwrap();

        assert_eq!(
            directory.list_all().await.unwrap(),
            vec![replacement.clone()]
        );
        assert_eq!(
            directory.find_by_id(client_id).await.unwrap().unwrap().last_name,
            ""
        );
    }

    #[tokio::test]
    async fn replace_of_unknown_id_is_not_found() {
        let directory = directory();
        let err = directory
            .upsert(client("Ana", "Lopez", 101).with_id(ClientId::from(7)))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NotFound(id) if id == ClientId::from(7)));
        assert!(directory.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lookups_of_unknown_or_deleted_ids_are_absent() {
        let directory = directory();
        assert_eq!(directory.find_by_id(ClientId::from(1)).await.unwrap(), None);

        let stored = directory.upsert(client("Ana", "Lopez", 101)).await.unwrap();
        directory.delete(&stored).await.unwrap();
        assert_eq!(directory.find_by_id(stored.id.unwrap()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_of_missing_client_is_reported() {
        let directory = directory();
        let kept = directory.upsert(client("Ana", "Lopez", 101)).await.unwrap();

        let err = directory.delete_by_id(ClientId::from(9)).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        directory.delete(&kept).await.unwrap();
        let err = directory.delete(&kept).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_of_unpersisted_client_is_rejected() {
        let directory = directory();
        let err = directory
            .delete(&client("Ana", "Lopez", 101))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Unpersisted));
    }

    #[tokio::test]
    async fn every_listed_client_is_retrievable() {
        let directory = directory();
        for membership_number in 1..=5 {
            directory
                .upsert(client("Client", "Test", membership_number))
                .await
                .unwrap();
        }

        let clients = directory.list_all().await.unwrap();
        assert_eq!(clients.len(), 5);
        for listed in clients {
            let found = directory.find_by_id(listed.id.unwrap()).await.unwrap();
            assert_eq!(found, Some(listed));
        }
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let directory = directory();
        let first = directory.upsert(client("Ana", "Lopez", 101)).await.unwrap();
        directory.delete(&first).await.unwrap();

        let second = directory.upsert(client("Ana", "Lopez", 101)).await.unwrap();
        assert_ne!(first.id, second.id);
    }
}
