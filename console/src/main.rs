mod context;
mod menu;

use crate::{context::Config, menu::Console};
use std::{
    io::{stdin, stdout},
    str::FromStr,
};
use types::config::ConfigReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::read_config()?;

    let tracing_level = tracing::Level::from_str(&config.rust_log)
        .map_err(|err| anyhow::anyhow!("Invalid RUST_LOG '{}': {}", config.rust_log, err))?;

    // Logs go to stderr so they do not interleave with the menu.
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing_level)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .map_err(|err| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", err))?;

    tracing::info!("Starting client console with config: {:?}", config);

    let directory = context::connect(&config).await?;
    let mut console = Console::new(directory, stdin().lock(), stdout().lock());
    console.run().await?;

    tracing::info!("Client console finished");
    Ok(())
}
