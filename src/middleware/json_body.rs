//! JSON request body parsing
//!
//! Requests that declare `Content-Type: application/json` have their body
//! buffered and parsed before routing. A body that does not parse is
//! rejected with a client error, so malformed JSON never reaches the API
//! router or the static stages. The parsed value is attached to the
//! request extensions as [`JsonBody`], and the buffered bytes are put back
//! so downstream `Json<T>` extractors keep working.
//!
//! Requests with other content types, and JSON requests with an empty
//! body, pass through untouched.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use bytes::Bytes;
use serde_json::Value;

use crate::error::AppError;

/// Largest JSON body the pipeline will buffer and parse.
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

/// Parsed JSON body, available to handlers via request extensions.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

/// JSON body parsing middleware.
pub async fn parse_json_body(request: Request, next: Next) -> Result<Response, AppError> {
    if !is_json_request(request.headers()) {
        return Ok(next.run(request).await);
    }

    let (mut parts, body) = request.into_parts();

    let bytes: Bytes = to_bytes(body, JSON_BODY_LIMIT)
        .await
        .map_err(|_| AppError::BodyTooLarge)?;

    if !bytes.is_empty() {
        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| AppError::malformed_json(e.to_string()))?;
        parts.extensions.insert(JsonBody(value));
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

/// Whether the request declares a JSON content type.
///
/// Media type parameters (`application/json; charset=utf-8`) are accepted.
fn is_json_request(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|media_type| media_type.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
