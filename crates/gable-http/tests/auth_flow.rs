//! Mock panel tests for the authenticated request flow.
//!
//! These tests use wiremock to simulate the panel backend and pin down the
//! session discipline: bearer attachment, 401-driven refresh, the single
//! retry, and teardown when a refresh cannot recover.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use gable_core::error::{AuthError, Error};
use gable_core::{AccessToken, MemoryTokenStore, PanelUrl, Session, TokenStore};
use gable_http::endpoints::{AUTH_REFRESH, ME};
use gable_http::{AuthClient, RefreshCoordinator, RequestOptions};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

mod common;
use common::{CountingNavigator, panel_url, seeded_store};

// ============================================================================
// Bearer Attachment
// ============================================================================

#[tokio::test]
async fn test_stored_token_sent_as_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ME))
        .and(header("authorization", "Bearer valid-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "email": "alice@example.com",
            "globalRole": "admin"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthClient::new(
        panel_url(&server),
        seeded_store("valid-access", "valid-refresh"),
        CountingNavigator::new(),
    );

    let response = client.request(ME, RequestOptions::get()).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn test_empty_store_sends_no_authorization_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ME))
        .and(|request: &Request| !request.headers.contains_key("authorization"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "missing token"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // No stored refresh token either, so no refresh call may happen.
    Mock::given(method("POST"))
        .and(path(AUTH_REFRESH))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let navigator = CountingNavigator::new();
    let client = AuthClient::new(
        panel_url(&server),
        Arc::new(MemoryTokenStore::new()),
        navigator.clone(),
    );

    let response = client.request(ME, RequestOptions::get()).await.unwrap();
    assert_eq!(response.status().as_u16(), 401);
    // There was no session to tear down.
    assert_eq!(navigator.logins_requested(), 0);
}

// ============================================================================
// Pass-Through Responses
// ============================================================================

#[tokio::test]
async fn test_success_response_passes_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ME))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "email": "alice@example.com",
            "globalRole": "user"
        })))
        .mount(&server)
        .await;

    let client = AuthClient::new(
        panel_url(&server),
        seeded_store("valid-access", "valid-refresh"),
        CountingNavigator::new(),
    );

    let response = client.request(ME, RequestOptions::get()).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["email"], "alice@example.com");
}

#[tokio::test]
async fn test_non_401_error_does_not_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sites/forbidden"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": "forbidden"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(AUTH_REFRESH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = seeded_store("valid-access", "valid-refresh");
    let navigator = CountingNavigator::new();
    let client = AuthClient::new(panel_url(&server), store.clone(), navigator.clone());

    let response = client
        .request("/api/sites/forbidden", RequestOptions::get())
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);
    // Session untouched: only a 401 means the token expired.
    assert!(store.read().await.has_access_token());
    assert_eq!(navigator.logins_requested(), 0);
}

#[tokio::test]
async fn test_transport_failure_surfaces_without_refresh() {
    // Grab a port with nothing listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let base = PanelUrl::new(&format!("http://127.0.0.1:{port}")).unwrap();
    let store = seeded_store("valid-access", "valid-refresh");
    let navigator = CountingNavigator::new();
    let client = AuthClient::new(base, store.clone(), navigator.clone());

    let result = client.request(ME, RequestOptions::get()).await;
    assert!(matches!(result, Err(Error::Transport(_))));
    // A network failure is not an expiry signal.
    assert!(store.read().await.has_access_token());
    assert_eq!(navigator.logins_requested(), 0);
}

// ============================================================================
// Refresh and Retry
// ============================================================================

#[tokio::test]
async fn test_expired_token_refreshes_and_retries_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ME))
        .and(header("authorization", "Bearer expired-access"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(AUTH_REFRESH))
        .and(body_json(json!({ "refreshToken": "valid-refresh" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "rotated-access",
            "refreshToken": "rotated-refresh"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(ME))
        .and(header("authorization", "Bearer rotated-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "email": "alice@example.com",
            "globalRole": "user"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store("expired-access", "valid-refresh");
    let navigator = CountingNavigator::new();
    let client = AuthClient::new(panel_url(&server), store.clone(), navigator.clone());

    let response = client.request(ME, RequestOptions::get()).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    // The rotated pair replaced the stored one atomically.
    let session = store.read().await;
    assert_eq!(session.access_token.unwrap().as_str(), "rotated-access");
    assert_eq!(session.refresh_token.unwrap().as_str(), "rotated-refresh");
    assert_eq!(navigator.logins_requested(), 0);
}

#[tokio::test]
async fn test_retry_response_is_final_even_when_401() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ME))
        .and(header("authorization", "Bearer expired-access"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(AUTH_REFRESH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "rotated-access",
            "refreshToken": "rotated-refresh"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The panel rejects even the rotated token; no second refresh happens.
    Mock::given(method("GET"))
        .and(path(ME))
        .and(header("authorization", "Bearer rotated-access"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "revoked"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store("expired-access", "valid-refresh");
    let navigator = CountingNavigator::new();
    let client = AuthClient::new(panel_url(&server), store.clone(), navigator.clone());

    let response = client.request(ME, RequestOptions::get()).await.unwrap();
    assert_eq!(response.status().as_u16(), 401);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "revoked");

    // The refresh itself succeeded, so the session survives.
    assert!(store.read().await.has_access_token());
    assert_eq!(navigator.logins_requested(), 0);
}

#[tokio::test]
async fn test_retry_rebuilds_identical_request() {
    let server = MockServer::start().await;
    let payload = json!({ "content": { "title": "Hello" } });

    Mock::given(method("PUT"))
        .and(path("/api/sites/s1/content"))
        .and(header("authorization", "Bearer expired-access"))
        .and(body_json(payload.clone()))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(AUTH_REFRESH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "rotated-access",
            "refreshToken": "rotated-refresh"
        })))
        .mount(&server)
        .await;

    // Same method, same body; only the bearer token changed.
    Mock::given(method("PUT"))
        .and(path("/api/sites/s1/content"))
        .and(header("authorization", "Bearer rotated-access"))
        .and(body_json(payload.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "updated"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthClient::new(
        panel_url(&server),
        seeded_store("expired-access", "valid-refresh"),
        CountingNavigator::new(),
    );

    let response = client
        .request("/api/sites/s1/content", RequestOptions::put(&payload))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

// ============================================================================
// Teardown
// ============================================================================

#[tokio::test]
async fn test_rejected_refresh_tears_down_and_returns_original() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ME))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(AUTH_REFRESH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "refresh expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store("expired-access", "expired-refresh");
    let navigator = CountingNavigator::new();
    let client = AuthClient::new(panel_url(&server), store.clone(), navigator.clone());

    let response = client.request(ME, RequestOptions::get()).await.unwrap();

    // The caller sees the first 401, not anything from the refresh call.
    assert_eq!(response.status().as_u16(), 401);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "token expired");

    assert!(store.read().await.is_empty());
    assert_eq!(navigator.logins_requested(), 1);
}

#[tokio::test]
async fn test_missing_refresh_token_fails_without_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ME))
        .and(header("authorization", "Bearer expired-access"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(AUTH_REFRESH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_session(Session {
        access_token: Some(AccessToken::new("expired-access")),
        refresh_token: None,
    }));
    let navigator = CountingNavigator::new();
    let client = AuthClient::new(panel_url(&server), store.clone(), navigator.clone());

    let response = client.request(ME, RequestOptions::get()).await.unwrap();
    assert_eq!(response.status().as_u16(), 401);

    assert!(store.read().await.is_empty());
    assert_eq!(navigator.logins_requested(), 1);
}

#[tokio::test]
async fn test_malformed_refresh_body_tears_down() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ME))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // 200 but the rotated pair is incomplete.
    Mock::given(method("POST"))
        .and(path(AUTH_REFRESH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "rotated-access"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store("expired-access", "valid-refresh");
    let navigator = CountingNavigator::new();
    let client = AuthClient::new(panel_url(&server), store.clone(), navigator.clone());

    let response = client.request(ME, RequestOptions::get()).await.unwrap();
    assert_eq!(response.status().as_u16(), 401);

    assert!(store.read().await.is_empty());
    assert_eq!(navigator.logins_requested(), 1);
}

#[tokio::test]
async fn test_refresh_network_failure_is_an_auth_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let base = PanelUrl::new(&format!("http://127.0.0.1:{port}")).unwrap();
    let coordinator = RefreshCoordinator::new(
        reqwest::Client::new(),
        base,
        seeded_store("expired-access", "valid-refresh"),
    );

    let result = coordinator.refresh().await;
    assert!(matches!(result, Err(AuthError::Network { .. })));
}

// ============================================================================
// Refresh Endpoint Exemption
// ============================================================================

#[tokio::test]
async fn test_401_from_refresh_path_is_final() {
    let server = MockServer::start().await;

    // Exactly one hit: a 401 here must not recurse into another refresh.
    Mock::given(method("POST"))
        .and(path(AUTH_REFRESH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "refresh expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store("valid-access", "expired-refresh");
    let navigator = CountingNavigator::new();
    let client = AuthClient::new(panel_url(&server), store.clone(), navigator.clone());

    let response = client
        .request(
            AUTH_REFRESH,
            RequestOptions::post(&json!({ "refreshToken": "expired-refresh" })),
        )
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);

    // The raw caller decides what to do; nothing was torn down for it.
    assert!(store.read().await.has_access_token());
    assert_eq!(navigator.logins_requested(), 0);
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_concurrent_401s_share_one_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ME))
        .and(header("authorization", "Bearer expired-access"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "token expired"
        })))
        .expect(5)
        .mount(&server)
        .await;

    // Slow enough that every caller's 401 lands while the exchange is
    // still in flight.
    Mock::given(method("POST"))
        .and(path(AUTH_REFRESH))
        .and(body_json(json!({ "refreshToken": "valid-refresh" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "accessToken": "rotated-access",
                    "refreshToken": "rotated-refresh"
                }))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(ME))
        .and(header("authorization", "Bearer rotated-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "email": "alice@example.com",
            "globalRole": "user"
        })))
        .expect(5)
        .mount(&server)
        .await;

    let store = seeded_store("expired-access", "valid-refresh");
    let navigator = CountingNavigator::new();
    let client = Arc::new(AuthClient::new(
        panel_url(&server),
        store.clone(),
        navigator.clone(),
    ));

    let requests = (0..5).map(|_| {
        let client = Arc::clone(&client);
        async move { client.request(ME, RequestOptions::get()).await }
    });
    let responses = join_all(requests).await;

    for response in responses {
        assert_eq!(response.unwrap().status().as_u16(), 200);
    }

    let session = store.read().await;
    assert_eq!(session.access_token.unwrap().as_str(), "rotated-access");
    assert_eq!(navigator.logins_requested(), 0);
}

#[tokio::test]
async fn test_concurrent_failures_tear_down_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ME))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "token expired"
        })))
        .expect(5)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(AUTH_REFRESH))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error": "refresh expired" }))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store("expired-access", "expired-refresh");
    let navigator = CountingNavigator::new();
    let client = Arc::new(AuthClient::new(
        panel_url(&server),
        store.clone(),
        navigator.clone(),
    ));

    let requests = (0..5).map(|_| {
        let client = Arc::clone(&client);
        async move { client.request(ME, RequestOptions::get()).await }
    });
    let responses = join_all(requests).await;

    // Every caller gets its own original 401 back.
    for response in responses {
        assert_eq!(response.unwrap().status().as_u16(), 401);
    }

    // One failed refresh, one teardown.
    assert!(store.read().await.is_empty());
    assert_eq!(navigator.logins_requested(), 1);
}

#[tokio::test]
async fn test_sequential_expiries_refresh_independently() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ME))
        .and(header("authorization", "Bearer expired-access"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(AUTH_REFRESH))
        .and(body_json(json!({ "refreshToken": "valid-refresh" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "second-access",
            "refreshToken": "second-refresh"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(ME))
        .and(header("authorization", "Bearer second-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "email": "alice@example.com",
            "globalRole": "user"
        })))
        .mount(&server)
        .await;

    // Later the second pair expires too; a fresh flight must start.
    Mock::given(method("GET"))
        .and(path("/api/sites"))
        .and(header("authorization", "Bearer second-access"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(AUTH_REFRESH))
        .and(body_json(json!({ "refreshToken": "second-refresh" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "third-access",
            "refreshToken": "third-refresh"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/sites"))
        .and(header("authorization", "Bearer third-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store("expired-access", "valid-refresh");
    let client = AuthClient::new(panel_url(&server), store.clone(), CountingNavigator::new());

    let first = client.request(ME, RequestOptions::get()).await.unwrap();
    assert_eq!(first.status().as_u16(), 200);

    let second = client
        .request("/api/sites", RequestOptions::get())
        .await
        .unwrap();
    assert_eq!(second.status().as_u16(), 200);

    let session = store.read().await;
    assert_eq!(session.refresh_token.unwrap().as_str(), "third-refresh");
}
