//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycles through the router.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use kv_cache::{
    api::create_router, cache::CacheStore, render::HtmlRenderer, AppState, StoreOptions,
};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::new(CacheStore::default()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_to_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// == Complete Workflows ==

#[tokio::test]
async fn test_full_crud_lifecycle() {
    let app = create_test_app();

    let response = send(&app, "POST", "/api", Some(json!({"a": 1}))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let key = body_to_json(response).await["key"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send(&app, "GET", &format!("/api/{}", key), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_json(response).await, json!({"a": 1}));

    let response = send(&app, "PUT", &format!("/api/{}", key), Some(json!({"b": 2}))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_to_json(response).await,
        json!({"key": key, "data": {"a": 1, "b": 2}})
    );

    let response = send(&app, "DELETE", &format!("/api/{}", key), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = send(&app, "GET", &format!("/api/{}", key), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_creates_missing_key() {
    let app = create_test_app();

    let response = send(&app, "PUT", "/api/new-key", Some(json!({"c": 3}))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_to_json(response).await, json!({"key": "new-key"}));

    let response = send(&app, "GET", "/api/new-key", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_json(response).await, json!({"c": 3}));
}

#[tokio::test]
async fn test_list_keys_in_insertion_order() {
    let app = create_test_app();

    for key in ["first", "second", "third"] {
        let response = send(&app, "PUT", &format!("/api/{}", key), Some(json!({}))).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(&app, "GET", "/api", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_to_json(response).await,
        json!({"keys": ["first", "second", "third"]})
    );
}

#[tokio::test]
async fn test_clear_endpoint() {
    let app = create_test_app();
    send(&app, "POST", "/api", Some(json!({"x": 1}))).await;
    send(&app, "POST", "/api", Some(json!({"y": 2}))).await;

    let response = send(&app, "DELETE", "/api", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, "GET", "/api", None).await;
    assert_eq!(body_to_json(response).await, json!({"keys": []}));

    // Clearing an empty store still succeeds
    let response = send(&app, "DELETE", "/api", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// == Error Mapping ==

#[tokio::test]
async fn test_delete_missing_key() {
    let app = create_test_app();

    let response = send(&app, "DELETE", "/api/ghost", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_to_json(response).await, json!({"error": "Key not found"}));
}

#[tokio::test]
async fn test_malformed_json_rejected_before_store() {
    let app = create_test_app();

    let request = Request::builder()
        .method("PUT")
        .uri("/api/broken")
        .header("content-type", "application/json")
        .body(Body::from("{\"a\":"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());

    let response = send(&app, "GET", "/api", None).await;
    assert_eq!(body_to_json(response).await, json!({"keys": []}));
}

// == Override Policy ==

#[tokio::test]
async fn test_put_merges_regardless_of_override() {
    let store = CacheStore::new(StoreOptions {
        allow_override: true,
        debug: true,
    });
    let app = create_router(AppState::new(store));

    send(&app, "PUT", "/api/user", Some(json!({"name": "wolfgang", "age": 30}))).await;
    let response = send(&app, "PUT", "/api/user", Some(json!({"age": 31}))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_to_json(response).await,
        json!({"key": "user", "data": {"name": "wolfgang", "age": 31}})
    );
}

#[tokio::test]
async fn test_put_over_stored_array_keeps_elements() {
    let app = create_test_app();

    let response = send(&app, "PUT", "/api/list", Some(json!([10, 20]))).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, "PUT", "/api/list", Some(json!({"a": 1}))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_to_json(response).await,
        json!({"key": "list", "data": {"0": 10, "1": 20, "a": 1}})
    );
}

// == Concurrency ==

#[tokio::test]
async fn test_concurrent_creates_all_retrievable() {
    let app = create_test_app();

    let tasks: Vec<_> = (0..50)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let response = send(&app, "POST", "/api", Some(json!({ "n": i }))).await;
                assert_eq!(response.status(), StatusCode::CREATED);
                let key = body_to_json(response).await["key"]
                    .as_str()
                    .unwrap()
                    .to_string();
                (i, key)
            })
        })
        .collect();

    let mut created = Vec::new();
    for task in tasks {
        created.push(task.await.unwrap());
    }

    let response = send(&app, "GET", "/api", None).await;
    let listed = body_to_json(response).await;
    assert_eq!(listed["keys"].as_array().unwrap().len(), 50);

    for (i, key) in created {
        let response = send(&app, "GET", &format!("/api/{}", key), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_to_json(response).await, json!({ "n": i }));
    }
}

#[tokio::test]
async fn test_concurrent_puts_to_same_absent_key() {
    let app = create_test_app();

    let first = tokio::spawn({
        let app = app.clone();
        async move { send(&app, "PUT", "/api/race", Some(json!({"a": 1}))).await.status() }
    });
    let second = tokio::spawn({
        let app = app.clone();
        async move { send(&app, "PUT", "/api/race", Some(json!({"b": 2}))).await.status() }
    });

    let mut statuses = vec![first.await.unwrap(), second.await.unwrap()];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::CREATED]);

    let response = send(&app, "GET", "/api/race", None).await;
    assert_eq!(body_to_json(response).await, json!({"a": 1, "b": 2}));
}

// == Landing Page ==

#[tokio::test]
async fn test_landing_page_substitutes_port() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        "<p>Port {{PORT}}, again {{ PORT }}, untouched {{OTHER}}</p>",
    )
    .unwrap();
    let state = AppState::with_landing(
        CacheStore::default(),
        HtmlRenderer::new(dir.path(), false),
        1312,
    );
    let app = create_router(state);

    let response = send(&app, "GET", "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert_eq!(body, "<p>Port 1312, again 1312, untouched {{OTHER}}</p>");
}

#[tokio::test]
async fn test_shipped_landing_page_renders() {
    let app = create_test_app();

    let response = send(&app, "GET", "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.contains("3000"));
    assert!(!body.contains("{{PORT}}"));
}

#[tokio::test]
async fn test_landing_page_missing_template() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::with_landing(
        CacheStore::default(),
        HtmlRenderer::new(dir.path().join("nowhere"), false),
        1312,
    );
    let app = create_router(state);

    let response = send(&app, "GET", "/", None).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert_eq!(body, "Internal Server Error");
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = send(&app, "GET", "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}
