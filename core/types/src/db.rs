use secrecy::SecretString;

pub trait DatabaseConnection {
    fn connection_string(&self) -> SecretString;
}

pub mod postgres {
    use crate::db::DatabaseConnection;
    use secrecy::{ExposeSecret, SecretBox, SecretString};
    use serde::Deserialize;

    const DEFAULT_PORT: u16 = 5432;

    /// Settings of the database holding the `clients` table.
    #[derive(Debug, Deserialize)]
    pub struct PostgresConnection {
        pub user: String,
        pub dbname: String,
        #[serde(default = "default_port")]
        pub port: u16,
        pub password: SecretBox<String>,
        pub host: String,
        pub sslrootcert: Option<String>,
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }

    impl DatabaseConnection for PostgresConnection {
        fn connection_string(&self) -> SecretString {
            let mut connection_str = format!(
                "postgresql://{}:{}@{}:{}/{}",
                self.user,
                self.password.expose_secret(),
                self.host,
                self.port,
                self.dbname
            );
            if let Some(ref sslcert) = self.sslrootcert {
                connection_str.push_str("?sslrootcert=");
                connection_str.push_str(sslcert);
            }
            connection_str.into()
        }
    }

}
