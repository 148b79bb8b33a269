use ::tracing::info;
use anyhow::{Context, Result};

mod app;
mod config;
mod db;
#[cfg(test)]
mod test_helpers;
mod tracing;

#[tokio::main]
async fn main() -> Result<()> {
    #[cfg(feature = "dotenv")]
    dotenv::dotenv().ok();

    let config = config::Settings::load().context("Failed to load config")?;

    let _guard = tracing::init(config.debug)?;

    info!(
        "Launching {}, version: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let db = db::new_pool(&config).context("Failed to create database pool")?;
    app::run(config, db).await
}
