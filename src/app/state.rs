use crate::config::Settings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{pool::PoolConnection, PgPool, Postgres};
use std::sync::Arc;

#[async_trait]
pub trait State: Send + Sync + Clone + 'static {
    fn config(&self) -> &Settings;
    async fn get_conn(&self) -> Result<PoolConnection<Postgres>>;
}

#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    config: Settings,
    db_pool: PgPool,
}

impl AppState {
    pub fn new(config: Settings, db_pool: PgPool) -> Self {
        Self {
            inner: Arc::new(InnerState { config, db_pool }),
        }
    }
}

#[async_trait]
impl State for AppState {
    fn config(&self) -> &Settings {
        &self.inner.config
    }

    async fn get_conn(&self) -> Result<PoolConnection<Postgres>> {
        self.inner
            .db_pool
            .acquire()
            .await
            .context("Failed to acquire DB connection")
    }
}
