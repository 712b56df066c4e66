//! Route Configuration Module
//!
//! Assembles the single request-handling pipeline and hosts the `/v1` API
//! router.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs    - Module exports
//! ├── router.rs - Pipeline assembly
//! └── api.rs    - /v1 API router
//! ```
//!
//! # Request Flow
//!
//! A request passes the middleware stages (CORS, access log, JSON body)
//! and is then routed:
//!
//! 1. `/v1/*` is delegated entirely to the API router
//! 2. Any other path that names a file under the public directory is
//!    served verbatim
//! 3. Everything else gets the SPA entry document with status 200, so the
//!    client-side router can take over

/// Pipeline assembly
pub mod router;

/// /v1 API router
pub mod api;

// Re-export commonly used functions
pub use router::create_router;
