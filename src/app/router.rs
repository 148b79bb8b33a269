use crate::app::{api::v1, log, state::State};
use axum::{extract::Extension, middleware, routing::get, Router};

pub fn new<S: State>(state: S) -> Router {
    api_router::<S>()
        .layer(Extension(state))
        .layer(middleware::from_fn(log::log_request))
}

fn api_router<S: State>() -> Router {
    Router::new()
        .route("/", get(v1::root))
        .route("/health", get(v1::health::<S>))
        .route("/courses", get(v1::course::list::<S>))
        .route("/courses/:slug", get(v1::course::read_by_slug::<S>))
        .fallback(v1::not_found)
}
