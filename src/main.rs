//! Mission Control server entry point
//!
//! Binds the request pipeline to a TCP listener. All behavior lives in the
//! library; this binary only reads configuration, initializes logging, and
//! serves.

use std::net::SocketAddr;

use mission_control::routes::api;
use mission_control::{create_app_with, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env();
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let app = create_app_with(config, api::router());

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Serve with connect info so the access log sees peer addresses
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
