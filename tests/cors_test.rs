//! CORS policy integration tests
//!
//! The contract: responses carry permissive headers for exactly one
//! configured origin. Any other origin gets nothing back, which is how
//! the browser learns to reject the response.

mod common;

use axum::http::{header, HeaderValue, Method, StatusCode};

use common::TestSite;
use mission_control::server::config::DEFAULT_CLIENT_ORIGIN;

#[tokio::test]
async fn configured_origin_receives_permissive_headers() {
    let site = TestSite::new();
    let server = common::server(&site);

    let response = server
        .get("/v1/ping")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static(DEFAULT_CLIENT_ORIGIN),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let allow_origin = response
        .maybe_header(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("allowed origin must be echoed back");
    assert_eq!(allow_origin, DEFAULT_CLIENT_ORIGIN);
}

#[tokio::test]
async fn other_origins_receive_no_permissive_headers() {
    let site = TestSite::new();
    let server = common::server(&site);

    let response = server
        .get("/v1/ping")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("https://not-the-client.example.com"),
        )
        .await;

    // The request itself still succeeds; only the headers are withheld
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response
        .maybe_header(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn spa_fallback_responses_carry_cors_headers_too() {
    let site = TestSite::new();
    let server = common::server(&site);

    let response = server
        .get("/dashboard/42")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static(DEFAULT_CLIENT_ORIGIN),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let allow_origin = response
        .maybe_header(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("fallback responses are CORS-visible to the client");
    assert_eq!(allow_origin, DEFAULT_CLIENT_ORIGIN);
}

#[tokio::test]
async fn preflight_is_answered_for_the_configured_origin() {
    let site = TestSite::new();
    let server = common::server(&site);

    let response = server
        .method(Method::OPTIONS, "/v1/ping")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static(DEFAULT_CLIENT_ORIGIN),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let allow_origin = response
        .maybe_header(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("preflight must allow the configured origin");
    assert_eq!(allow_origin, DEFAULT_CLIENT_ORIGIN);

    let allow_methods = response
        .maybe_header(header::ACCESS_CONTROL_ALLOW_METHODS)
        .expect("preflight must list allowed methods");
    assert!(allow_methods.to_str().unwrap().contains("POST"));
}

#[tokio::test]
async fn client_origin_override_is_respected() {
    let site = TestSite::new();
    let mut config = site.config();
    config.client_origin = "http://localhost:3000".to_string();

    let server = axum_test::TestServer::new(mission_control::create_app_with(
        config,
        mission_control::routes::api::router(),
    ))
    .expect("start test server");

    let response = server
        .get("/v1/ping")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("http://localhost:3000"),
        )
        .await;

    let allow_origin = response
        .maybe_header(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("overridden origin must be echoed back");
    assert_eq!(allow_origin, "http://localhost:3000");

    // The default origin is no longer allowed once overridden
    let response = server
        .get("/v1/ping")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static(DEFAULT_CLIENT_ORIGIN),
        )
        .await;
    assert!(response
        .maybe_header(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
