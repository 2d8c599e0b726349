use config::{Config, ConfigError, Environment, Source};
use serde::Deserialize;

/// Nesting separator for environment keys, e.g. `DATABASE__HOST` -> `database.host`.
pub const ENV_SEPARATOR: &str = "__";

pub trait ConfigReader<'de, T: Deserialize<'de>> {
    fn read_config() -> Result<T, ConfigError> {
        Self::read_config_from(Environment::default().separator(ENV_SEPARATOR))
    }

    fn read_config_from<S>(source: S) -> Result<T, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let config = Config::builder().add_source(source).build()?;

        config.try_deserialize::<T>()
    }
}

impl<'de, T: Deserialize<'de>> ConfigReader<'de, T> for T {}
