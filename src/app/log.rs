use axum::middleware::Next;
use axum::response::Response;
use http::Request;
use std::time::Instant;
use tracing::info;

pub async fn log_request<B>(req: Request<B>, next: Next<B>) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started_at = Instant::now();

    let resp = next.run(req).await;

    info!(
        method = %method,
        path = %path,
        status = resp.status().as_u16(),
        elapsed_ms = u64::try_from(started_at.elapsed().as_millis()).unwrap_or(u64::MAX),
        "Request handled"
    );

    resp
}
