use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use poll_chat::common::{ChatMessage, HealthResponse};
use poll_chat::server::{ServerState, router};
use poll_chat::storage::MessageStore;
use serde_json::{Value, json};
use tower::ServiceExt;

fn make_app() -> (Router, Arc<MessageStore>) {
    let store = Arc::new(MessageStore::new());
    (router(ServerState::new(Arc::clone(&store))), store)
}

async fn body_json(resp: axum::response::Response) -> Value {
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn health_reports_healthy() {
    let (app, _) = make_app();
    let resp = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let health: HealthResponse = serde_json::from_value(body_json(resp).await).unwrap();
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn list_is_empty_array_when_no_messages() {
    let (app, _) = make_app();
    let resp = app.oneshot(get("/api/messages")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn create_returns_created_message_and_location() {
    let (app, store) = make_app();
    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/messages",
            json!({ "username": "alice", "content": "hi" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let created: ChatMessage = serde_json::from_value(body_json(resp).await).unwrap();
    assert_eq!(created.username, "alice");
    assert_eq!(created.content, "hi");
    assert_eq!(location, format!("/api/messages/{}", created.id));
    assert_eq!(store.list(), vec![created.clone()]);

    // The location resolves to the same message.
    let resp = app.oneshot(get(&location)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: ChatMessage = serde_json::from_value(body_json(resp).await).unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn timestamps_serialize_as_utc_rfc3339() {
    let (app, _) = make_app();
    let resp = app
        .oneshot(post_json(
            "/api/messages",
            json!({ "username": "alice", "content": "hi" }),
        ))
        .await
        .unwrap();
    let body = body_json(resp).await;
    let stamp = body["timestamp"].as_str().unwrap();
    assert!(stamp.ends_with('Z'), "not UTC: {stamp}");
    assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
}

#[tokio::test]
async fn create_rejects_blank_username() {
    let (app, store) = make_app();
    for username in ["", "   "] {
        let resp = app
            .clone()
            .oneshot(post_json(
                "/api/messages",
                json!({ "username": username, "content": "hi" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            json!({ "error": "Username and content are required" })
        );
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn create_rejects_blank_or_missing_content() {
    let (app, store) = make_app();
    let payloads = [
        json!({ "username": "alice", "content": "" }),
        json!({ "username": "alice", "content": "\t\n" }),
        json!({ "username": "alice" }),
    ];
    for payload in payloads {
        let resp = app
            .clone()
            .oneshot(post_json("/api/messages", payload))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    let resp = app.oneshot(get("/api/messages")).await.unwrap();
    assert_eq!(body_json(resp).await, json!([]));
    assert!(store.is_empty());
}

#[tokio::test]
async fn create_rejects_null_fields() {
    let (app, store) = make_app();
    let payloads = [
        json!({ "username": null, "content": "hi" }),
        json!({ "username": "alice", "content": null }),
    ];
    for payload in payloads {
        let resp = app
            .clone()
            .oneshot(post_json("/api/messages", payload))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            json!({ "error": "Username and content are required" })
        );
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn create_rejects_malformed_json() {
    let (app, store) = make_app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/messages")
        .header("content-type", "application/json")
        .body(Body::from("{ nope"))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].is_string());
    assert!(store.is_empty());
}

#[tokio::test]
async fn list_returns_messages_oldest_first() {
    let (app, _) = make_app();
    for (username, content) in [("alice", "hi"), ("bob", "hello")] {
        let resp = app
            .clone()
            .oneshot(post_json(
                "/api/messages",
                json!({ "username": username, "content": content }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app.oneshot(get("/api/messages")).await.unwrap();
    let messages: Vec<ChatMessage> = serde_json::from_value(body_json(resp).await).unwrap();
    let pairs: Vec<_> = messages
        .iter()
        .map(|m| (m.username.as_str(), m.content.as_str()))
        .collect();
    assert_eq!(pairs, vec![("alice", "hi"), ("bob", "hello")]);
    assert_ne!(messages[0].id, messages[1].id);
}

#[tokio::test]
async fn clear_returns_no_content_and_empties_list() {
    let (app, store) = make_app();
    store.append("alice", "hi");

    let resp = app.clone().oneshot(delete("/api/messages")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());

    let resp = app.oneshot(get("/api/messages")).await.unwrap();
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn clear_on_empty_store_still_succeeds() {
    let (app, _) = make_app();
    let resp = app.oneshot(delete("/api/messages")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn unknown_message_id_is_not_found() {
    let (app, _) = make_app();
    let resp = app.oneshot(get("/api/messages/does-not-exist")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "message not found: does-not-exist" })
    );
}
