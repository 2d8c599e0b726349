pub mod client;

use secrecy::ExposeSecret;
use types::db::DatabaseConnection;

pub struct PostgresPool {
    pub pg_pool: sqlx::PgPool,
}

impl PostgresPool {
    pub async fn new(settings: &impl DatabaseConnection) -> Result<Self, sqlx::Error> {
        let pg_pool = sqlx::PgPool::connect(settings.connection_string().expose_secret()).await?;
        Ok(Self { pg_pool })
    }

    /// Brings the schema up to date. Safe to call on every start.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pg_pool).await?;
        tracing::debug!("Database migrations applied");
        Ok(())
    }
}
