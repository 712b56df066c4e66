//! /v1 API router
//!
//! The feature routers of the application mount here; their handlers are
//! not this crate's concern. What this module guarantees is the shape of
//! the `/v1` prefix: a service-health probe, and a JSON 404 for unknown
//! API routes so a miss under `/v1` is answered by the API stage and
//! never falls through to the SPA fallback.

use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;

/// Build the default `/v1` router.
pub fn router() -> Router {
    Router::new()
        .route("/ping", get(ping))
        .fallback(unknown_route)
}

#[derive(Debug, Serialize)]
struct PingResponse {
    status: &'static str,
}

/// Service-health probe.
async fn ping() -> Json<PingResponse> {
    Json(PingResponse { status: "ok" })
}

/// JSON 404 for API routes that do not exist.
async fn unknown_route(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": format!("no such API route: {}", uri.path()),
            "status": StatusCode::NOT_FOUND.as_u16(),
        })),
    )
}
