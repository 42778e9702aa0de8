#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use echoroom_api::config::ServerConfig;
use echoroom_api::router::build_app_router;
use echoroom_api::state::AppState;

/// Caller id used by tests that do not care who the caller is.
pub const USER: &str = "user-1";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router over a fresh, empty store.
///
/// The router is `Clone` and clones share the store, so a test can issue
/// several requests with `app.clone()`.
pub fn build_test_app() -> Router {
    let state = AppState {
        pool: echoroom_db::create_pool(),
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    user: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// GET without a caller id.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, user: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(user), None).await
}

/// POST JSON without a caller id.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    user: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(user), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    user: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(user), Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an idea through the API and return its `data` object.
pub async fn create_idea(app: &Router, title: &str) -> serde_json::Value {
    let response = post_json_auth(
        app.clone(),
        "/api/v1/ideas",
        USER,
        serde_json::json!({ "title": title, "description": "A description" }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

/// Move an idea to `status` with the given expected version.
pub async fn set_status(
    app: &Router,
    id: &str,
    expected_version: u64,
    status: &str,
) -> Response<Body> {
    put_json_auth(
        app.clone(),
        &format!("/api/v1/ideas/{id}/status"),
        USER,
        serde_json::json!({ "expected_version": expected_version, "status": status }),
    )
    .await
}

/// Create an idea and walk it to `approved`, returning its id.
pub async fn approved_idea(app: &Router, title: &str) -> String {
    let idea = create_idea(app, title).await;
    let id = idea["id"].as_str().unwrap().to_string();
    for (version, status) in [(0, "submitted"), (1, "under_review"), (2, "approved")] {
        let response = set_status(app, &id, version, status).await;
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
    id
}
