use crate::app::api::{json_response, AppResult};
use crate::app::error::{ErrorExt, ErrorKind};
use crate::app::state::State;
use crate::db::course::{CourseList, FindBySlugQuery};
use anyhow::Context;
use axum::extract::{Extension, Path};
use http::StatusCode;

pub async fn list<S: State>(Extension(state): Extension<S>) -> AppResult {
    do_list(state).await
}

async fn do_list<S: State>(state: S) -> AppResult {
    let mut conn = state
        .get_conn()
        .await
        .error(ErrorKind::DbConnAcquisitionFailed)?;

    let courses = CourseList
        .execute(&mut conn)
        .await
        .context("Failed to get list of courses")
        .error(ErrorKind::DbQueryFailed)?;

    json_response(StatusCode::OK, &courses)
}

pub async fn read_by_slug<S: State>(
    Extension(state): Extension<S>,
    Path(slug): Path<String>,
) -> AppResult {
    do_read_by_slug(state, &slug).await
}

async fn do_read_by_slug<S: State>(state: S, slug: &str) -> AppResult {
    let mut conn = state
        .get_conn()
        .await
        .error(ErrorKind::DbConnAcquisitionFailed)?;

    let course = FindBySlugQuery::new(slug)
        .execute(&mut conn)
        .await
        .context("Failed to find course by slug")
        .error(ErrorKind::DbQueryFailed)?
        .ok_or(ErrorKind::CourseNotFound)?;

    json_response(StatusCode::OK, &course)
}
