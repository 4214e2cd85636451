//! Integration tests for the session-forwarding proxy routes

#![cfg(feature = "server")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use souk_http::config::HttpConfig;
use souk_http::server::HttpServer;
use souk_http::state::AppState;
use tower::ServiceExt;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(backend: &MockServer) -> axum::Router {
    let state = AppState::new(backend.uri(), reqwest::Client::new());
    HttpServer::new(HttpConfig::default(), state).create_app()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn identity_forwards_cookie_and_relays_status() {
    let backend = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("cookie", "souk_session=abc123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": {"id": "u-1"}}))
                .insert_header("set-cookie", "souk_session=abc123; Path=/; HttpOnly"),
        )
        .mount(&backend)
        .await;

    let app = app_for(&backend);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header("cookie", "souk_session=abc123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("set-cookie").unwrap(),
        "souk_session=abc123; Path=/; HttpOnly"
    );
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );

    let body = body_text(response).await;
    assert!(body.contains("\"success\":true"));
}

#[tokio::test]
async fn identity_without_cookie_sends_none() {
    let backend = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "error": {"message": "Not authenticated"}
            })),
        )
        .mount(&backend)
        .await;

    let app = app_for(&backend);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Status passes through unchanged
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The proxy never synthesizes a cookie header
    let received = backend.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(!received[0].headers.contains_key("cookie"));
}

#[tokio::test]
async fn csrf_token_header_forwarded_under_both_names() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(header("x-csrf-token", "tok-1"))
        .and(header("csrf-token", "tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&backend)
        .await;

    let app = app_for(&backend);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .header("x-csrf-token", "tok-1")
                .header("csrf-token", "tok-2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unlisted_headers_are_not_forwarded() {
    let backend = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/csrf-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"token\":\"t\"}"))
        .mount(&backend)
        .await;

    let app = app_for(&backend);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/csrf-token")
                .header("x-forwarded-for", "10.0.0.1")
                .header("authorization", "Bearer nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let received = backend.received_requests().await.unwrap();
    assert!(!received[0].headers.contains_key("x-forwarded-for"));
    assert!(!received[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn login_forwards_body_and_content_type() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_string("{\"email\":\"a@b.c\",\"password\":\"pw\"}"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true}))
                .insert_header("set-cookie", "souk_session=fresh; Path=/"),
        )
        .mount(&backend)
        .await;

    let app = app_for(&backend);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("content-type", "application/json")
                .body(Body::from("{\"email\":\"a@b.c\",\"password\":\"pw\"}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("set-cookie").unwrap(),
        "souk_session=fresh; Path=/"
    );
}

#[tokio::test]
async fn backend_error_status_passes_through_exactly() {
    let backend = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&backend)
        .await;

    let app = app_for(&backend);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_text(response).await, "down");
}

#[tokio::test]
async fn unreachable_backend_maps_to_bad_gateway() {
    // Point at a port nothing listens on
    let state = AppState::new("http://127.0.0.1:9", reqwest::Client::new());
    let app = HttpServer::new(HttpConfig::default(), state).create_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_text(response).await;
    assert!(body.contains("backend_unreachable"));
}

#[tokio::test]
async fn read_proxy_relays_failure_envelope_verbatim() {
    let backend = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .and(header("cookie", "souk_session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": {"message": "Metrics unavailable"}
        })))
        .mount(&backend)
        .await;

    let app = app_for(&backend);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/dashboard/stats")
                .header("cookie", "souk_session=abc123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // The proxy does not interpret the envelope; success=false still rides a 200
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Metrics unavailable"));
}

#[tokio::test]
async fn health_endpoint_is_local() {
    let backend = MockServer::start().await;
    let app = app_for(&backend);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("healthy"));

    // Never touches the backend
    assert!(backend.received_requests().await.unwrap().is_empty());
}
