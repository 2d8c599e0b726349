use crate::ClientDirectory;
use repositories::client::ClientRepository;
use types::{
    client::{Client, ClientId},
    error::Error,
};

/// A presentation adapter's view of the directory with a read-through client listing.
///
/// The listing is loaded on first use and dropped after every mutation, successful or not.
pub struct CachedDirectory<R> {
    directory: ClientDirectory<R>,
    listing: Option<Vec<Client>>,
}

impl<R: ClientRepository> CachedDirectory<R> {
    pub fn new(directory: ClientDirectory<R>) -> Self {
        Self {
            directory,
            listing: None,
        }
    }

    pub fn directory(&self) -> &ClientDirectory<R> {
        &self.directory
    }

    pub fn is_cached(&self) -> bool {
        self.listing.is_some()
    }

    pub async fn list(&mut self) -> Result<&[Client], Error> {
        let listing = match self.listing.take() {
            Some(listing) => listing,
            None => {
                tracing::debug!("Client listing not cached, loading");
                self.directory.list_all().await?
            }
        };
        Ok(self.listing.insert(listing).as_slice())
    }

    pub async fn refresh(&mut self) -> Result<&[Client], Error> {
        self.invalidate();
        self.list().await
    }

    pub fn invalidate(&mut self) {
        self.listing = None;
    }

    pub async fn find_by_id(&self, client_id: ClientId) -> Result<Option<Client>, Error> {
        self.directory.find_by_id(client_id).await
    }

    pub async fn upsert(&mut self, client: Client) -> Result<Client, Error> {
        self.invalidate();
        self.directory.upsert(client).await
    }

    pub async fn delete_by_id(&mut self, client_id: ClientId) -> Result<(), Error> {
        self.invalidate();
        self.directory.delete_by_id(client_id).await
    }
}
