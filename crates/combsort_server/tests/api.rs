//! HTTP-level tests for the sort endpoint.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use combsort_server::wire::{ErrorBody, SortResponse, EMPTY_ARRAY_MESSAGE};
use combsort_server::{
    AuthConfig, OpenGate, ServerConfig, SortServer, TokenGate, ANONYMOUS_USER, TOKEN_COOKIE,
};
use combsort_testkit::{scenarios, RecordingJournal};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::ServiceExt;

const SECRET: &[u8] = b"integration-test-secret";

fn open_server(config: ServerConfig) -> (Router, Arc<RecordingJournal>) {
    let journal = Arc::new(RecordingJournal::new());
    let server = SortServer::with_collaborators(config, Arc::new(OpenGate), journal.clone());
    (server.router(), journal)
}

fn gated_server() -> (Router, TokenGate, Arc<RecordingJournal>) {
    let gate = TokenGate::new(AuthConfig::new(SECRET.to_vec()));
    let journal = Arc::new(RecordingJournal::new());
    let server = SortServer::with_collaborators(
        ServerConfig::default().with_auth(SECRET.to_vec()),
        Arc::new(gate.clone()),
        journal.clone(),
    );
    (server.router(), gate, journal)
}

fn sort_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/sort")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send<T: DeserializeOwned>(router: Router, request: Request<Body>) -> (StatusCode, T) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn index_describes_service() {
    let (router, _) = open_server(ServerConfig::default());
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("/api/sort"));
}

#[tokio::test]
async fn sorts_sample_ascending() {
    let (router, journal) = open_server(ServerConfig::default());
    let (status, body): (_, SortResponse) =
        send(router, sort_request(r#"{"array": [5, 2, 8, 1, 9, 3]}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.original_array, vec![5, 2, 8, 1, 9, 3]);
    assert_eq!(body.sorted_array, vec![1, 2, 3, 5, 8, 9]);
    assert!(body.ascending);
    assert_eq!(body.gap, 4);
    assert!(body.execution_time_ms >= 0.0);

    let records = journal.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].input, vec![5, 2, 8, 1, 9, 3]);
    assert_eq!(records[0].output, vec![1, 2, 3, 5, 8, 9]);
    assert_eq!(records[0].user_id.as_deref(), Some(ANONYMOUS_USER));
}

#[tokio::test]
async fn scenarios_over_http() {
    for scenario in scenarios().into_iter().filter(|s| !s.input.is_empty()) {
        let (router, _) = open_server(ServerConfig::default());
        let body = serde_json::json!({
            "array": scenario.input,
            "ascending": scenario.ascending,
            "gap": scenario.gap,
        });
        let (status, response): (_, SortResponse) =
            send(router, sort_request(&body.to_string())).await;

        assert_eq!(status, StatusCode::OK, "{}", scenario.name);
        assert_eq!(response.sorted_array, scenario.expected, "{}", scenario.name);
        assert_eq!(response.gap, scenario.expected_gap, "{}", scenario.name);
        assert_eq!(response.ascending, scenario.ascending, "{}", scenario.name);
    }
}

#[tokio::test]
async fn negative_gap_is_ignored() {
    let (router, _) = open_server(ServerConfig::default());
    let (status, body): (_, SortResponse) = send(
        router,
        sort_request(r#"{"array": [5, 2, 8, 1, 9, 3], "ascending": false, "gap": -3}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.sorted_array, vec![9, 8, 5, 3, 2, 1]);
    assert_eq!(body.gap, 4);
}

#[tokio::test]
async fn empty_and_null_arrays_rejected() {
    for json in [r#"{"array": []}"#, r#"{"array": null}"#, r#"{}"#] {
        let (router, journal) = open_server(ServerConfig::default());
        let (status, body): (_, ErrorBody) = send(router, sort_request(json)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{json}");
        assert_eq!(body.error, EMPTY_ARRAY_MESSAGE);
        assert!(journal.is_empty());
    }
}

#[tokio::test]
async fn malformed_json_rejected() {
    let (router, journal) = open_server(ServerConfig::default());
    let (status, body): (_, ErrorBody) =
        send(router, sort_request(r#"{"array": [1, "two"]}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body.error.is_empty());
    assert!(journal.is_empty());
}

#[tokio::test]
async fn oversized_array_rejected() {
    let (router, _) = open_server(ServerConfig::default().with_max_values(3));
    let (status, body): (_, ErrorBody) =
        send(router, sort_request(r#"{"array": [4, 3, 2, 1]}"#)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body.error.contains("at most 3"));
}

#[tokio::test]
async fn body_over_byte_limit_rejected() {
    let (router, journal) = open_server(ServerConfig::default().with_max_body_bytes(16));
    let (status, body): (_, ErrorBody) =
        send(router, sort_request(r#"{"array": [1, 2, 3, 4, 5, 6, 7, 8, 9]}"#)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(!body.error.is_empty());
    assert!(journal.is_empty());
}

#[tokio::test]
async fn missing_content_type_rejected() {
    let (router, journal) = open_server(ServerConfig::default());
    let request = Request::builder()
        .method("POST")
        .uri("/api/sort")
        .body(Body::from(r#"{"array": [2, 1]}"#))
        .unwrap();
    let (status, _): (_, ErrorBody) = send(router, request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(journal.is_empty());
}

#[tokio::test]
async fn gated_without_token_is_unauthorized() {
    let (router, _, journal) = gated_server();
    let (status, body): (_, ErrorBody) =
        send(router, sort_request(r#"{"array": [2, 1]}"#)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.error.contains("Authentication required"));
    assert!(journal.is_empty());
}

#[tokio::test]
async fn gated_with_bad_token_is_unauthorized() {
    let (router, _, _) = gated_server();
    let mut request = sort_request(r#"{"array": [2, 1]}"#);
    request.headers_mut().insert(
        header::AUTHORIZATION,
        "Bearer alice.1.deadbeef".parse().unwrap(),
    );
    let (status, _): (_, ErrorBody) = send(router, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn gate_runs_before_body_is_read() {
    let (router, _, journal) = gated_server();
    for json in [r#"{"array": [1, "two"]"#, r#"{"array": []}"#] {
        let (status, body): (_, ErrorBody) = send(router.clone(), sort_request(json)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{json}");
        assert!(body.error.contains("Authentication required"));
    }
    assert!(journal.is_empty());
}

#[tokio::test]
async fn gated_with_bearer_token() {
    let (router, gate, journal) = gated_server();
    let token = gate.create_token("alice").unwrap();
    let mut request = sort_request(r#"{"array": [2, 3, 1], "ascending": false}"#);
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );

    let (status, body): (_, SortResponse) = send(router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.sorted_array, vec![3, 2, 1]);
    assert_eq!(journal.records()[0].user_id.as_deref(), Some("alice"));
}

#[tokio::test]
async fn gated_with_cookie_token() {
    let (router, gate, journal) = gated_server();
    let token = gate.create_token("bob").unwrap();
    let mut request = sort_request(r#"{"array": [2, 1]}"#);
    request.headers_mut().insert(
        header::COOKIE,
        format!("{TOKEN_COOKIE}={token}").parse().unwrap(),
    );

    let (status, body): (_, SortResponse) = send(router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.sorted_array, vec![1, 2]);
    assert_eq!(journal.records()[0].user_id.as_deref(), Some("bob"));
}

#[tokio::test]
async fn default_server_uses_token_gate_when_secret_set() {
    let server = SortServer::new(ServerConfig::default().with_auth(SECRET.to_vec()));
    let (status, _): (_, ErrorBody) =
        send(server.router(), sort_request(r#"{"array": [2, 1]}"#)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
