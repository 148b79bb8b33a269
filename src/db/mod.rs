use crate::config::Settings;
use sqlx::{postgres::PgPoolOptions, PgPool};

pub mod course;

/// Connections are opened on first use, so the service starts with the store down.
pub fn new_pool(settings: &Settings) -> sqlx::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(settings.database_pool_size)
        .min_connections(settings.database_pool_idle_size)
        .acquire_timeout(settings.database_pool_timeout)
        .max_lifetime(settings.database_pool_max_lifetime)
        .connect_lazy(&settings.database_url)
}
