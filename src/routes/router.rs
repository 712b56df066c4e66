//! Pipeline assembly
//!
//! Builds the application router from its stages, in the order the
//! external contract describes them:
//!
//! 1. CORS policy (outermost layer, answers preflights itself)
//! 2. Combined-format access logging
//! 3. JSON body parsing
//! 4. `/v1` delegation to the API router
//! 5. Static files from the public directory
//! 6. SPA index fallback for everything unmatched
//!
//! Stages 5 and 6 are one tower service: `ServeDir` with the entry
//! document as its not-found service. A missing file is how client-side
//! routes look to the server, so it is answered with the index and a
//! success status rather than treated as an error.

use axum::{middleware, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::middleware::{access_log::access_log, cors::cors_layer, json_body::parse_json_body};
use crate::server::config::ServerConfig;

/// Create the application router with all stages configured.
///
/// The provided `api` router is nested under `/v1` and owns that whole
/// prefix, including misses inside it. Note that this gives the API
/// prefix routing precedence over a static file that happens to be named
/// `v1/...`.
pub fn create_router(config: &ServerConfig, api: Router) -> Router {
    // Static stage: existing files verbatim, the SPA entry document for
    // everything that is not a file. Non-GET requests to unmatched paths
    // are answered by the service's own method handling.
    let static_site = ServeDir::new(&config.public_dir)
        .not_found_service(ServeFile::new(config.index_file()));

    // Layers run top-down in reverse order of addition: CORS first, then
    // the access log, then body parsing, then routing.
    Router::new()
        .nest("/v1", api)
        .fallback_service(static_site)
        .layer(middleware::from_fn(parse_json_body))
        .layer(middleware::from_fn(access_log))
        .layer(cors_layer(config))
}
