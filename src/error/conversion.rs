//! Error conversion
//!
//! Implements `IntoResponse` for the pipeline errors so middleware can
//! return them directly. The response body is JSON:
//!
//! ```json
//! {
//!   "error": "malformed JSON body: ...",
//!   "status": 400
//! }
//! ```

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
