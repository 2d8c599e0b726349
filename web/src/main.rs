mod context;
mod routes;
mod server;

use crate::{
    context::{Config, Context},
    server::make_server,
};
use std::str::FromStr;
use types::config::ConfigReader;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::read_config()?;

    let tracing_level = tracing::Level::from_str(&config.rust_log)
        .map_err(|err| anyhow::anyhow!("Invalid RUST_LOG '{}': {}", config.rust_log, err))?;

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing_level)
            .finish(),
    )
    .map_err(|err| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", err))?;

    tracing::info!("Starting client directory service with config: {:?}", config);

    let ctx = Context::build(config).await?;
    let server = make_server(ctx)?;

    server.await?;

    tracing::info!("Client directory service stopped");
    Ok(())
}
