//! Integration tests for backend candidate resolution

#![cfg(feature = "server")]

use souk_http::config::resolve_backend;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

async fn healthy_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"status\":\"healthy\"}"))
        .mount(&server)
        .await;
    server
}

async fn unhealthy_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn picks_first_live_candidate() {
    let live = healthy_server().await;
    let candidates = vec![live.uri()];

    let client = reqwest::Client::new();
    let resolved = resolve_backend(&client, &candidates, PROBE_TIMEOUT).await;
    assert_eq!(resolved, live.uri());
}

#[tokio::test]
async fn skips_dead_candidates_and_picks_second() {
    let dead = unhealthy_server().await;
    let live = healthy_server().await;
    let spare = healthy_server().await;
    let candidates = vec![dead.uri(), live.uri(), spare.uri()];

    let client = reqwest::Client::new();
    let resolved = resolve_backend(&client, &candidates, PROBE_TIMEOUT).await;
    assert_eq!(resolved, live.uri());
}

#[tokio::test]
async fn falls_back_to_first_when_none_answer() {
    // Ports with nothing listening
    let candidates = vec![
        "http://127.0.0.1:9".to_string(),
        "http://127.0.0.1:19".to_string(),
    ];

    let client = reqwest::Client::new();
    let resolved = resolve_backend(&client, &candidates, PROBE_TIMEOUT).await;
    assert_eq!(resolved, "http://127.0.0.1:9");
}

#[tokio::test]
async fn slow_candidate_is_treated_as_dead() {
    let slow = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&slow)
        .await;
    let live = healthy_server().await;

    let candidates = vec![slow.uri(), live.uri()];
    let client = reqwest::Client::new();
    let resolved = resolve_backend(&client, &candidates, Duration::from_millis(200)).await;
    assert_eq!(resolved, live.uri());
}
