//! Mission Control - HTTP entry point
//!
//! This library wires together the request pipeline for the Mission Control
//! web application: a CORS policy for the browser client, combined-format
//! access logging, JSON body parsing, static asset serving, a mounted `/v1`
//! API router, and a single-page-app index fallback for every unmatched
//! route.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── server/      - Configuration and application assembly
//! ├── routes/      - Router construction and the /v1 API router
//! ├── middleware/  - CORS, access logging, JSON body parsing
//! └── error/       - Pipeline error types and HTTP conversion
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use mission_control::create_app;
//!
//! # async fn example() {
//! let app = create_app();
//! // Bind a listener and hand `app` to axum::serve
//! # }
//! ```
//!
//! Embedders that bring their own `/v1` router (or tests that need to
//! observe delegation) can use [`create_app_with`] instead.

/// Server configuration and application assembly
pub mod server;

/// Router construction and API routes
pub mod routes;

/// Request processing middleware
pub mod middleware;

/// Pipeline error types
pub mod error;

// Re-export the main entry points
pub use error::AppError;
pub use server::config::ServerConfig;
pub use server::init::{create_app, create_app_with};
