use directory::{
    storage::{Storage, StorageKind},
    ClientDirectory,
};
use serde::Deserialize;
use std::fmt::Debug;
use types::db::postgres::PostgresConnection;

#[derive(Deserialize)]
pub struct Config {
    pub rust_log: String,
    pub port: u16,
    #[serde(default)]
    pub storage: StorageKind,
    pub database: Option<PostgresConnection>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .field("storage", &self.storage)
            .finish()
    }
}

pub struct Context {
    pub config: Config,
    pub directory: ClientDirectory<Storage>,
}

impl Context {
    pub async fn build(config: Config) -> anyhow::Result<Self> {
        let storage = Storage::connect(config.storage, config.database.as_ref()).await?;
        Ok(Self::new(config, storage))
    }

    pub fn new(config: Config, storage: Storage) -> Self {
        Self {
            config,
            directory: ClientDirectory::new(storage),
        }
    }
}
