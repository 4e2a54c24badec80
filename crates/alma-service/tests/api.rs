//! End-to-end handler tests over the router.

use alma_service::{create_router, AppState, ServiceConfig};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_router() -> Router {
    let config = ServiceConfig::default();
    let state = AppState::new(&config);
    create_router(state, &config)
}

async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_reports_healthy() {
    let router = test_router();
    let request = Request::builder()
        .uri("/api/v1/health")
        .body(Body::empty())
        .expect("request");
    let response = router.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body: Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["active_sessions"], 0);
}

#[tokio::test]
async fn analyze_rejects_empty_text() {
    let router = test_router();
    let (status, body) = post_json(&router, "/api/v1/analyze", json!({ "text": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().expect("error field").contains("empty"));
}

#[tokio::test]
async fn analyze_scores_left_leaning_text() {
    let router = test_router();
    let (status, body) = post_json(
        &router,
        "/api/v1/analyze",
        json!({ "text": "I support progressive social justice and healthcare reform" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["political"]["lean"], "left");
    assert!(body["political"]["score"].as_f64().expect("score") > 0.0);
}

#[tokio::test]
async fn analyze_neutral_text_is_fully_quiet() {
    let router = test_router();
    let (status, body) = post_json(
        &router,
        "/api/v1/analyze",
        json!({ "text": "The weather is nice today" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["political"]["lean"], "neutral");
    assert_eq!(body["political"]["score"], 0.0);
    assert_eq!(body["emotional"]["has_emotional_content"], false);
    assert_eq!(body["cognitive"]["has_absolute_language"], false);
}

#[tokio::test]
async fn chat_anchors_on_every_fifth_message() {
    let router = test_router();

    let (status, first) = post_json(&router, "/api/v1/chat", json!({ "message": "hello" })).await;
    assert_eq!(status, StatusCode::OK);
    let session_id = first["session_id"].as_str().expect("session id").to_string();
    assert_eq!(first["query_count"], 1);
    assert_eq!(first["show_reality_anchor"], false);
    assert!(first["reality_anchor"].is_null());

    let mut anchors = vec![false];
    for _ in 2..=5 {
        let (status, body) = post_json(
            &router,
            "/api/v1/chat",
            json!({ "message": "tell me about science", "session_id": session_id }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        anchors.push(body["show_reality_anchor"].as_bool().expect("flag"));
        if body["show_reality_anchor"] == true {
            assert!(body["reality_anchor"].is_string());
        }
    }

    assert_eq!(anchors, vec![false, false, false, false, true]);
}

#[tokio::test]
async fn chat_with_unknown_session_is_not_found() {
    let router = test_router();
    let (status, _) = post_json(
        &router,
        "/api/v1/chat",
        json!({ "message": "hello", "session_id": "session-does-not-exist" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stateless_chat_reconstructs_from_caller_counter() {
    let router = test_router();
    let (status, body) = post_json(
        &router,
        "/api/v1/chat",
        json!({ "message": "progressive healthcare equality now", "query_count": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query_count"], 5);
    assert_eq!(body["show_reality_anchor"], true);
    assert!(body["session_id"].is_null());
    // Injection is stateful-transport behavior only.
    assert!(body["viewpoint_injection"].is_null());
}

#[tokio::test]
async fn chat_flags_absolute_language_in_reply() {
    let router = test_router();
    let (status, body) = post_json(
        &router,
        "/api/v1/chat",
        json!({ "message": "this is always impossible", "query_count": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["biases"]["cognitive"]["has_absolute_language"], true);
    assert!(body["message"]
        .as_str()
        .expect("reply")
        .contains("absolute language"));
}

#[tokio::test]
async fn ended_session_is_gone() {
    let router = test_router();
    let (_, first) = post_json(&router, "/api/v1/chat", json!({ "message": "hello" })).await;
    let session_id = first["session_id"].as_str().expect("session id").to_string();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/v1/sessions/{session_id}"))
        .body(Body::empty())
        .expect("request");
    let response = router.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let (status, _) = post_json(
        &router,
        "/api/v1/chat",
        json!({ "message": "hello again", "session_id": session_id }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn feedback_is_acknowledged() {
    let router = test_router();
    let (status, body) = post_json(
        &router,
        "/api/v1/feedback",
        json!({ "feedback": "the anchors are helpful", "type": "praise" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}
