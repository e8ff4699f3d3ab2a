//! Common test utilities and fixtures
#![allow(dead_code)]

use acue_core::RecordStore;
use acue_server::{api, AccountPolicy, AccountService, AppState};
use acue_storage::InMemoryStore;
use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::{path::PathBuf, sync::Arc};
use tower::util::ServiceExt;

/// Router over an in-memory store, plus the store for inspection
pub fn create_test_app(admin_token: Option<&str>) -> (Router, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let app = create_app_with_store(
        store.clone(),
        admin_token,
        PathBuf::from("missing/index.html"),
    );
    (app, store)
}

/// Router over any record store
pub fn create_app_with_store(
    store: Arc<dyn RecordStore>,
    admin_token: Option<&str>,
    index_path: PathBuf,
) -> Router {
    let accounts = Arc::new(AccountService::new(store, AccountPolicy::default()));
    let app_state = AppState::new(accounts, admin_token.map(str::to_string), index_path);
    api::create_router(app_state)
}

/// Send a request and return status, headers and raw body
pub async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body)
}

/// Send a request and parse the JSON response body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send_raw(app, request).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// POST a JSON body
pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Test user credentials
pub mod fixtures {
    pub const TEST_USERNAME: &str = "bob";
    pub const TEST_PASSWORD: &str = "secret1";
    pub const ADMIN_TOKEN: &str = "admin-test-token";
}
