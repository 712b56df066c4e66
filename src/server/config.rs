//! Server configuration
//!
//! Configuration is loaded from environment variables, with sensible
//! defaults for every value. Loading never fails: a malformed value is
//! logged and ignored in favor of its default, so the server always comes
//! up with a usable configuration.
//!
//! # Recognized Variables
//!
//! - `CLIENT_ORIGIN` - the browser origin allowed by the CORS policy
//! - `PORT` - TCP port the binary listens on
//! - `PUBLIC_DIR` - directory the static assets are served from

use std::path::PathBuf;

/// Origin of the deployed client application, used when `CLIENT_ORIGIN`
/// is not set.
pub const DEFAULT_CLIENT_ORIGIN: &str = "https://nasa-mission-kartikey.netlify.app";

/// Port used when `PORT` is not set or not a valid port number.
pub const DEFAULT_PORT: u16 = 8000;

/// Static asset directory used when `PUBLIC_DIR` is not set.
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Immutable startup configuration for the request pipeline.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The single browser origin the CORS policy allows.
    pub client_origin: String,
    /// Port the server binary binds to.
    pub port: u16,
    /// Directory static assets (and the SPA entry document) live in.
    pub public_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// Missing variables fall back to their defaults. A `PORT` value that
    /// does not parse as a port number is ignored with a warning rather
    /// than treated as an error.
    pub fn from_env() -> Self {
        let client_origin = std::env::var("CLIENT_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_CLIENT_ORIGIN.to_string());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|raw| match raw.parse::<u16>() {
                Ok(port) => Some(port),
                Err(_) => {
                    tracing::warn!(
                        value = %raw,
                        "PORT is not a valid port number, using {}",
                        DEFAULT_PORT
                    );
                    None
                }
            })
            .unwrap_or(DEFAULT_PORT);

        let public_dir = std::env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PUBLIC_DIR));

        Self {
            client_origin,
            port,
            public_dir,
        }
    }

    /// Path of the SPA entry document inside the public directory.
    pub fn index_file(&self) -> PathBuf {
        self.public_dir.join("index.html")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            client_origin: DEFAULT_CLIENT_ORIGIN.to_string(),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}
