//! Pipeline error types
//!
//! These errors are returned by the body-parsing middleware and convert
//! directly into client-error HTTP responses. They never carry server
//! state; each one describes why a single request was rejected.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors raised while a request moves through the pipeline.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request declared a JSON content type but its body did not parse.
    #[error("malformed JSON body: {detail}")]
    MalformedJson {
        /// Parser description of what went wrong
        detail: String,
    },

    /// The request body exceeded the parsing limit.
    #[error("request body exceeds the body size limit")]
    BodyTooLarge,
}

impl AppError {
    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedJson { .. } => StatusCode::BAD_REQUEST,
            Self::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    /// Shorthand for a malformed-JSON error with the given detail.
    pub fn malformed_json(detail: impl Into<String>) -> Self {
        Self::MalformedJson {
            detail: detail.into(),
        }
    }
}
