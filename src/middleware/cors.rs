//! Cross-origin policy
//!
//! The browser client is deployed on a different origin than the API, so
//! every response needs CORS headers for exactly that origin. Enforcement
//! is the browser's job: a request from anywhere else is not an error on
//! the server side, it simply gets no permissive headers back.
//!
//! The layer sits outermost in the pipeline, so preflight requests are
//! answered before any other stage runs.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::server::config::{ServerConfig, DEFAULT_CLIENT_ORIGIN};

/// Build the CORS layer allowing the configured client origin.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin(config))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// The configured origin as a header value.
///
/// An origin that is not a valid header value cannot be matched by the
/// browser anyway, so it is ignored in favor of the default with a
/// warning rather than failing startup.
fn allowed_origin(config: &ServerConfig) -> HeaderValue {
    HeaderValue::from_str(&config.client_origin).unwrap_or_else(|_| {
        tracing::warn!(
            origin = %config.client_origin,
            "client origin is not a valid header value, using {}",
            DEFAULT_CLIENT_ORIGIN
        );
        HeaderValue::from_static(DEFAULT_CLIENT_ORIGIN)
    })
}
