use crate::app::api::{json_response, AppError, AppResult};
use crate::app::error::ErrorKind;
use crate::app::state::State;
use crate::db::course::CourseCounter;
use anyhow::{Context, Result};
use axum::extract::Extension;
use http::StatusCode;
use serde_derive::Serialize;
use tracing::warn;

pub mod course;

const WELCOME_MESSAGE: &str = "Bienvenido a Platziflix API";

#[derive(Serialize)]
struct Welcome {
    message: &'static str,
}

pub async fn root() -> AppResult {
    json_response(
        StatusCode::OK,
        &Welcome {
            message: WELCOME_MESSAGE,
        },
    )
}

pub async fn not_found() -> AppError {
    ErrorKind::RouteNotFound.into()
}

#[derive(Debug, Serialize)]
struct Health<'a> {
    status: &'static str,
    service: &'a str,
    version: &'a str,
    database: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    courses_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    database_error: Option<String>,
}

pub async fn health<S: State>(Extension(state): Extension<S>) -> AppResult {
    do_health(state).await
}

/// Database failures are reported in the body as a degraded status, never as
/// an HTTP error.
async fn do_health<S: State>(state: S) -> AppResult {
    let config = state.config();

    let health = match probe_database(&state).await {
        Ok(count) => Health {
            status: "ok",
            service: &config.project_name,
            version: &config.version,
            database: true,
            courses_count: Some(count),
            database_error: None,
        },
        Err(e) => {
            warn!(error = %format!("{:#}", e), "Database probe failed");

            Health {
                status: "degraded",
                service: &config.project_name,
                version: &config.version,
                database: false,
                courses_count: None,
                database_error: Some(format!("{:#}", e)),
            }
        }
    };

    json_response(StatusCode::OK, &health)
}

async fn probe_database<S: State>(state: &S) -> Result<i64> {
    let mut conn = state.get_conn().await?;

    CourseCounter
        .execute(&mut conn)
        .await
        .context("Failed to count courses")
}
