//! Combined-format access logging
//!
//! Emits one log line per request in the Apache/nginx combined format:
//!
//! `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent
//! "$http_referer" "$http_user_agent"`
//!
//! The line goes through `tracing` with target `access`, so the standard
//! subscriber writes it to the process's logging sink and `RUST_LOG` can
//! filter it like any other target.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::Local;

/// Everything a combined-format line needs, captured around one request.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address, `-` when the transport has no peer address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// HTTP version as it appears in the request line (e.g. `HTTP/1.1`)
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: u64,
    /// Referer header
    pub referer: Option<String>,
    /// User-Agent header
    pub user_agent: Option<String>,
}

impl AccessLogEntry {
    /// Format the entry as an Apache/nginx combined log line.
    pub fn combined(&self) -> String {
        format!(
            "{} - - [{}] \"{} {}{} {}\" {} {} \"{}\" \"{}\"",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.query
                .as_ref()
                .map(|q| format!("?{q}"))
                .unwrap_or_default(),
            self.http_version,
            self.status,
            self.body_bytes,
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }
}

/// Access logging middleware.
///
/// Captures the request line before the rest of the pipeline runs, then
/// emits exactly one line once the response is produced, whatever its
/// status. The peer address is taken from `ConnectInfo` when the server
/// was started with connect info; in-process callers log `-`.
pub async fn access_log(request: Request, next: Next) -> Response {
    let started = Instant::now();

    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_owned);
    let http_version = format!("{:?}", request.version());
    let referer = header_value(request.headers(), header::REFERER);
    let user_agent = header_value(request.headers(), header::USER_AGENT);

    let response = next.run(request).await;

    let entry = AccessLogEntry {
        remote_addr,
        time: Local::now(),
        method,
        path,
        query,
        http_version,
        status: response.status().as_u16(),
        body_bytes: content_length(response.headers()),
        referer,
        user_agent,
    };

    tracing::info!(
        target: "access",
        elapsed_us = started.elapsed().as_micros() as u64,
        "{}",
        entry.combined()
    );

    response
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Response body size as declared by Content-Length, 0 for responses
/// without one (e.g. streamed bodies).
fn content_length(headers: &HeaderMap) -> u64 {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}
