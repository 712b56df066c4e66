//! Common test utilities
//!
//! Provides a temporary public directory fixture and helpers for building
//! an in-process test server around the real pipeline.

// Not every test binary uses every helper
#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use mission_control::{create_app_with, ServerConfig};

/// SPA entry document written into every fixture public directory.
pub const INDEX_HTML: &str = "<!DOCTYPE html>\n<html><body><div id=\"root\"></div></body></html>\n";

/// A known static asset, served under `/js/app.js`.
pub const APP_JS: &str = "console.log(\"mission control\");\n";

/// Temporary public directory with an entry document and one asset.
///
/// Holds the directory handle so the files live as long as the test.
pub struct TestSite {
    dir: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp public dir");
        std::fs::write(dir.path().join("index.html"), INDEX_HTML).expect("write index.html");
        std::fs::create_dir(dir.path().join("js")).expect("create js dir");
        std::fs::write(dir.path().join("js").join("app.js"), APP_JS).expect("write app.js");
        Self { dir }
    }

    /// Configuration pointing at the fixture directory, defaults otherwise.
    pub fn config(&self) -> ServerConfig {
        ServerConfig {
            public_dir: self.dir.path().to_path_buf(),
            ..ServerConfig::default()
        }
    }
}

/// In-process server around the full pipeline with the given `/v1` router.
pub fn server_with_api(site: &TestSite, api: Router) -> TestServer {
    TestServer::new(create_app_with(site.config(), api)).expect("start test server")
}

/// In-process server with the built-in `/v1` router.
pub fn server(site: &TestSite) -> TestServer {
    server_with_api(site, mission_control::routes::api::router())
}
