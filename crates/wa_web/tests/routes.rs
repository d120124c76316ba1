//! Route tests for the sort service, driven through the router without a socket.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::util::ServiceExt;
use wa_web::create_app;

async fn send(method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = create_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_sort_numbers() {
    let (status, body) = send(Method::POST, "/api/quick_sort", Some(r#"{"numbers": [3, 1, 2]}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"input": [3, 1, 2], "output": [1, 2, 3], "count": 3}));
}

#[tokio::test]
async fn test_sort_empty_list() {
    let (status, body) = send(Method::POST, "/api/quick_sort", Some(r#"{"numbers": []}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"input": [], "output": [], "count": 0}));
}

#[tokio::test]
async fn test_sort_keeps_number_representation() {
    let (status, body) = send(Method::POST, "/api/quick_sort", Some(r#"{"numbers": [2.5, -1, 2, 2]}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], json!([-1, 2, 2, 2.5]));
    assert_eq!(body["count"], 4);
}

#[tokio::test]
async fn test_missing_numbers_field() {
    let (status, body) = send(Method::POST, "/api/quick_sort", Some("{}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Please provide \"numbers\" field"}));
}

#[tokio::test]
async fn test_numbers_not_a_list() {
    let (status, body) = send(Method::POST, "/api/quick_sort", Some(r#"{"numbers": "x"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "\"numbers\" must be a list"}));
}

#[tokio::test]
async fn test_unparsable_body() {
    let (status, body) = send(Method::POST, "/api/quick_sort", Some("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(Method::POST, "/api/quick_sort", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_non_number_element_is_internal_error() {
    let (status, body) = send(Method::POST, "/api/quick_sort", Some(r#"{"numbers": [1, "a"]}"#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("not a number"));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(Method::GET, "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_sort_rejects_get() {
    let (status, _) = send(Method::GET, "/api/quick_sort", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
