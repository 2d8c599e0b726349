use directory::{
    cache::CachedDirectory,
    storage::{Storage, StorageKind},
    ClientDirectory,
};
use serde::Deserialize;
use std::fmt::Debug;
use types::db::postgres::PostgresConnection;

#[derive(Deserialize)]
pub struct Config {
    pub rust_log: String,
    #[serde(default)]
    pub storage: StorageKind,
    pub database: Option<PostgresConnection>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("rust_log", &self.rust_log)
            .field("storage", &self.storage)
            .finish()
    }
}

pub async fn connect(config: &Config) -> anyhow::Result<CachedDirectory<Storage>> {
    let storage = Storage::connect(config.storage, config.database.as_ref()).await?;
    Ok(CachedDirectory::new(ClientDirectory::new(storage)))
}
