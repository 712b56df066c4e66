//! Request Middleware Module
//!
//! The three pipeline stages that run ahead of routing, in the order a
//! request passes through them:
//!
//! 1. **`cors`** - cross-origin policy for the single allowed client origin
//! 2. **`access_log`** - one combined-format log line per request
//! 3. **`json_body`** - JSON body parsing with client-error rejection
//!
//! The layers are attached in `routes::router`; each module here only
//! provides its own stage.

/// Cross-origin policy
pub mod cors;

/// Combined-format access logging
pub mod access_log;

/// JSON request body parsing
pub mod json_body;

// Re-export commonly used items
pub use access_log::access_log;
pub use cors::cors_layer;
pub use json_body::{parse_json_body, JsonBody};
