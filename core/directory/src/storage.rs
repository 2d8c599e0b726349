use memory_database::MemoryStore;
use postgres_database::PostgresPool;
use repositories::client::ClientRepository;
use serde::Deserialize;
use types::{
    client::{Client, ClientId},
    db::postgres::PostgresConnection,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Postgres,
    Memory,
}

/// Backing store selected at start-up.
pub enum Storage {
    Postgres(PostgresPool),
    Memory(MemoryStore),
}

impl Storage {
    pub async fn connect(
        kind: StorageKind,
        database: Option<&PostgresConnection>,
    ) -> anyhow::Result<Self> {
        match kind {
            StorageKind::Postgres => {
                let settings = database.ok_or_else(|| {
                    anyhow::anyhow!("Postgres storage selected but no database settings given")
                })?;
                let pool = PostgresPool::new(settings).await?;
                pool.migrate().await?;
                tracing::info!("Using Postgres storage at {}", settings.host);
                Ok(Storage::Postgres(pool))
            }
            StorageKind::Memory => {
                tracing::info!("Using in-memory storage");
                Ok(Storage::Memory(MemoryStore::new()))
            }
        }
    }
}

impl ClientRepository for Storage {
    async fn find_all(&self) -> anyhow::Result<Vec<Client>> {
        match self {
            Storage::Postgres(db) => db.find_all().await,
            Storage::Memory(db) => db.find_all().await,
        }
    }

    async fn find(&self, client_id: ClientId) -> anyhow::Result<Option<Client>> {
        match self {
            Storage::Postgres(db) => db.find(client_id).await,
            Storage::Memory(db) => db.find(client_id).await,
        }
    }

    async fn insert(&self, client: Client) -> anyhow::Result<Client> {
        match self {
            Storage::Postgres(db) => db.insert(client).await,
            Storage::Memory(db) => db.insert(client).await,
        }
    }

    async fn update(&self, client_id: ClientId, client: Client) -> anyhow::Result<Option<Client>> {
        match self {
            Storage::Postgres(db) => db.update(client_id, client).await,
            Storage::Memory(db) => db.update(client_id, client).await,
        }
    }

    async fn delete(&self, client_id: ClientId) -> anyhow::Result<bool> {
        match self {
            Storage::Postgres(db) => db.delete(client_id).await,
            Storage::Memory(db) => db.delete(client_id).await,
        }
    }
}
