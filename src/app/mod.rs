use crate::app::state::AppState;
use crate::config::Settings;
use anyhow::{Context, Result};
use futures_util::StreamExt;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use sqlx::PgPool;
use tracing::info;

pub mod api;
pub mod error;
mod log;
pub mod router;
pub mod state;

pub async fn run(config: Settings, db: PgPool) -> Result<()> {
    let listener_address = config
        .listener_address()
        .await
        .context("Invalid listener address")?;

    info!(
        service = %config.project_name,
        version = %config.version,
        debug = config.debug,
        "App config loaded"
    );

    let mut signals = Signals::new([SIGTERM, SIGINT]).context("Failed to register signals")?;
    let signals_handle = signals.handle();

    let state = AppState::new(config, db.clone());
    let router = router::new(state);

    info!("Server is starting on {}...", listener_address);

    axum::Server::try_bind(&listener_address)
        .context("Failed to bind listener")?
        .serve(router.into_make_service())
        .with_graceful_shutdown(async move {
            if let Some(signal) = signals.next().await {
                info!(signal, "Received signal, shutting down...");
            }
        })
        .await
        .context("Server failed")?;

    signals_handle.close();
    db.close().await;

    info!("Server stopped");

    Ok(())
}
