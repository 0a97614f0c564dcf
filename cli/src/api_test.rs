use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{Json, Router};
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use serde_json::json;
use tokio::net::TcpListener;

use super::*;

#[derive(Clone, Default)]
struct Backend {
    refreshes: Arc<AtomicUsize>,
}

fn bearer_of(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_owned)
}

async fn campaigns(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if bearer_of(&headers).as_deref() == Some("fresh") {
        (StatusCode::OK, Json(json!({ "campaigns": [], "pagination": { "page": 1, "total": 0 } })))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Token has expired" })))
    }
}

async fn refresh(State(backend): State<Backend>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    backend.refreshes.fetch_add(1, Ordering::SeqCst);
    if bearer_of(&headers).as_deref() == Some("r1") {
        (StatusCode::OK, Json(json!({ "access_token": "fresh", "refresh_token": "r2" })))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid refresh token" })))
    }
}

async fn login() -> (StatusCode, Json<Value>) {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid credentials" })))
}

async fn change_password(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let message = if bearer_of(&headers).as_deref() == Some("fresh") {
        "Current password is incorrect"
    } else {
        "Token has expired"
    };
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": message })))
}

async fn boom() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>")
}

async fn echo_query(RawQuery(query): RawQuery) -> Json<Value> {
    Json(json!({ "query": query }))
}

async fn spawn_backend() -> (String, Backend) {
    let backend = Backend::default();
    let router = Router::new()
        .route("/api/campaigns", get(campaigns))
        .route("/api/auth/refresh", post(refresh))
        .route("/api/auth/login", post(login))
        .route("/api/auth/change-password", post(change_password))
        .route("/api/boom", get(boom))
        .route("/api/echo", get(echo_query))
        .route("/api/tweets/1", delete(|| async { StatusCode::NO_CONTENT }))
        .with_state(backend.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{addr}/api"), backend)
}

fn client(base: &str, access: Option<&str>, refresh: Option<&str>) -> ApiClient {
    ApiClient::new(base, access.map(str::to_owned), refresh.map(str::to_owned)).unwrap()
}

#[tokio::test]
async fn valid_token_needs_no_refresh() {
    let (base, backend) = spawn_backend().await;
    let mut api = client(&base, Some("fresh"), Some("r1"));

    let value = api.request(Method::GET, "/campaigns", &[], None).await.unwrap();
    assert_eq!(value["campaigns"], json!([]));
    assert_eq!(backend.refreshes.load(Ordering::SeqCst), 0);
    assert_eq!(api.rotated_tokens(), None);
}

#[tokio::test]
async fn expired_token_refreshes_once_and_replays() {
    let (base, backend) = spawn_backend().await;
    let mut api = client(&base, Some("stale"), Some("r1"));

    let value = api.request(Method::GET, "/campaigns", &[], None).await.unwrap();
    assert_eq!(value["pagination"]["page"], 1);
    assert_eq!(backend.refreshes.load(Ordering::SeqCst), 1);
    assert_eq!(
        api.rotated_tokens(),
        Some(TokenPair { access_token: "fresh".into(), refresh_token: "r2".into() })
    );
}

#[tokio::test]
async fn failed_refresh_clears_tokens_and_reports_unauthorized() {
    let (base, backend) = spawn_backend().await;
    let mut api = client(&base, Some("stale"), Some("revoked"));

    let err = api.request(Method::GET, "/campaigns", &[], None).await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(backend.refreshes.load(Ordering::SeqCst), 1);
    assert_eq!(api.rotated_tokens(), None);
}

#[tokio::test]
async fn missing_refresh_token_skips_refresh() {
    let (base, backend) = spawn_backend().await;
    let mut api = client(&base, Some("stale"), None);

    let err = api.request(Method::GET, "/campaigns", &[], None).await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 401, message: "Token has expired".into() });
    assert_eq!(backend.refreshes.load(Ordering::SeqCst), 0);
    assert_eq!(api.access_token.as_deref(), Some("stale"));
}

#[tokio::test]
async fn replayed_401_reports_server_message_and_keeps_tokens() {
    let (base, backend) = spawn_backend().await;
    let mut api = client(&base, Some("stale"), Some("r1"));
    let body = json!({ "current_password": "wrong", "new_password": "hunter22" });

    let err = api.request(Method::POST, "/auth/change-password", &[], Some(&body)).await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 401, message: "Current password is incorrect".into() });
    assert_eq!(backend.refreshes.load(Ordering::SeqCst), 1);
    assert_eq!(
        api.rotated_tokens(),
        Some(TokenPair { access_token: "fresh".into(), refresh_token: "r2".into() })
    );
}

#[tokio::test]
async fn login_rejection_keeps_server_message() {
    let (base, backend) = spawn_backend().await;
    let mut api = client(&base, None, Some("r1"));
    let body = json!({ "email": "a@b.c", "password": "nope" });

    let err = api.request(Method::POST, "/auth/login", &[], Some(&body)).await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 401, message: "Invalid credentials".into() });
    assert_eq!(backend.refreshes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_json_error_falls_back_to_status_message() {
    let (base, _) = spawn_backend().await;
    let mut api = client(&base, None, None);

    let err = api.request(Method::GET, "/boom", &[], None).await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, message: "Request failed with status 500".into() });
}

#[tokio::test]
async fn empty_success_body_is_null() {
    let (base, _) = spawn_backend().await;
    let mut api = client(&base, None, None);

    let value = api.request(Method::DELETE, "/tweets/1", &[], None).await.unwrap();
    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn query_pairs_are_encoded() {
    let (base, _) = spawn_backend().await;
    let mut api = client(&base, None, None);
    let query = [("status", "draft".to_owned()), ("page", "2".to_owned())];

    let value = api.request(Method::GET, "/echo", &query, None).await.unwrap();
    assert_eq!(value["query"], "status=draft&page=2");
}

#[tokio::test]
async fn closed_port_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let mut api = client(&format!("http://{addr}/api"), None, None);

    let err = api.request(Method::GET, "/health", &[], None).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[test]
fn blank_tokens_count_as_missing() {
    let api = ApiClient::new("http://x/api/", Some("  ".into()), Some(String::new())).unwrap();
    assert_eq!(api.url("/campaigns"), "http://x/api/campaigns");
    assert!(api.access_token.is_none());
    assert!(api.refresh_token.is_none());
}

#[test]
fn parse_body_handles_empty_and_invalid_success_bodies() {
    assert_eq!(parse_body(200, "  ").unwrap(), Value::Null);
    assert!(matches!(parse_body(200, "not json"), Err(ApiError::Decode(_))));
}
