use axum::Router;
use axum::http::{HeaderValue, Uri};
use axum::routing::{any, get};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use super::*;
use crate::config::ServerConfig;
use crate::routes::api_routes;

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> (StatusCode, Json<Value>) {
    let value_of = |name: HeaderName| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    (
        StatusCode::CREATED,
        Json(json!({
            "method": method.as_str(),
            "path": uri.path(),
            "query": uri.query(),
            "authorization": value_of(header::AUTHORIZATION),
            "cookie": value_of(header::COOKIE),
            "body": body,
        })),
    )
}

async fn teapot() -> impl IntoResponse {
    (StatusCode::IM_A_TEAPOT, [(header::CONTENT_TYPE, "text/plain")], "short and stout")
}

fn mock_backend() -> Router {
    Router::new().route("/api/teapot", get(teapot)).route("/api/{*rest}", any(echo))
}

async fn proxy_for(backend_url: String) -> String {
    let state = AppState::new(ServerConfig { port: 0, backend_url, proxy_timeout_secs: 5 }).unwrap();
    serve(api_routes(state)).await
}

#[test]
fn forwarded_headers_keeps_only_the_allow_list() {
    let mut incoming = HeaderMap::new();
    incoming.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer a"));
    incoming.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    incoming.insert(header::COOKIE, HeaderValue::from_static("session=1"));
    incoming.insert(header::HOST, HeaderValue::from_static("dashboard.test"));

    let out = forwarded_headers(&incoming);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer a");
    assert!(out.get(header::COOKIE).is_none());
}

#[test]
fn proxy_error_renders_bad_gateway() {
    let response = ProxyError::Unreachable("refused".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn forwards_method_path_query_body_and_auth() {
    let backend = serve(mock_backend()).await;
    let proxy = proxy_for(backend).await;

    let reply = reqwest::Client::new()
        .post(format!("{proxy}/api/campaigns/7/activate?page=2"))
        .header("authorization", "Bearer abc")
        .header("cookie", "session=1")
        .json(&json!({ "name": "Spring" }))
        .send()
        .await
        .unwrap();

    assert_eq!(reply.status(), reqwest::StatusCode::CREATED);
    let seen: Value = reply.json().await.unwrap();
    assert_eq!(seen["method"], "POST");
    assert_eq!(seen["path"], "/api/campaigns/7/activate");
    assert_eq!(seen["query"], "page=2");
    assert_eq!(seen["authorization"], "Bearer abc");
    assert_eq!(seen["cookie"], Value::Null);
    assert_eq!(seen["body"], r#"{"name":"Spring"}"#);
}

#[tokio::test]
async fn relays_backend_status_and_content_type() {
    let backend = serve(mock_backend()).await;
    let proxy = proxy_for(backend).await;

    let reply = reqwest::get(format!("{proxy}/api/teapot")).await.unwrap();
    assert_eq!(reply.status().as_u16(), 418);
    assert_eq!(reply.headers().get("content-type").unwrap(), "text/plain");
    assert_eq!(reply.text().await.unwrap(), "short and stout");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway_with_message() {
    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = closed.local_addr().unwrap();
    drop(closed);
    let proxy = proxy_for(format!("http://{addr}")).await;

    let reply = reqwest::get(format!("{proxy}/api/campaigns")).await.unwrap();
    assert_eq!(reply.status().as_u16(), 502);
    let body: Value = reply.json().await.unwrap();
    assert_eq!(body["message"], BACKEND_UNAVAILABLE);
}

#[tokio::test]
async fn healthz_is_ok() {
    let proxy = proxy_for("http://127.0.0.1:9".into()).await;
    let reply = reqwest::get(format!("{proxy}/healthz")).await.unwrap();
    assert_eq!(reply.status().as_u16(), 200);
}
