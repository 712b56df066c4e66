//! Application assembly
//!
//! Builds the configured, ready-to-listen request pipeline. Assembly has no
//! failure modes: configuration falls back to defaults and the router is
//! pure composition, so both functions return a `Router` directly.

use axum::Router;

use crate::routes::{api, router::create_router};
use crate::server::config::ServerConfig;

/// Create the application with environment-derived configuration and the
/// built-in `/v1` API router.
///
/// This is what the server binary mounts. The returned router is ready to
/// hand to `axum::serve`.
pub fn create_app() -> Router {
    create_app_with(ServerConfig::from_env(), api::router())
}

/// Create the application from an explicit configuration and `/v1` router.
///
/// The API router is nested under `/v1` as-is; everything about its routes
/// is the collaborator's business. Tests use this to substitute a stub
/// router and observe delegation.
pub fn create_app_with(config: ServerConfig, api: Router) -> Router {
    tracing::info!(
        origin = %config.client_origin,
        public_dir = %config.public_dir.display(),
        "building request pipeline"
    );

    create_router(&config, api)
}
