use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    routing::post,
    Router,
};
use fitcoach_proxy::{create_router, ProxyState};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Serve a `/chat` backend that records bodies and answers with `status`.
async fn spawn_backend(status: StatusCode, reply: &'static str) -> (String, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&seen);
    let app = Router::new().route(
        "/chat",
        post(move |body: String| {
            let captured = Arc::clone(&captured);
            async move {
                captured.lock().unwrap().push(body);
                (status, [(header::CONTENT_TYPE, "application/json")], reply)
            }
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}/chat", addr), seen)
}

fn chat_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn forwards_body_and_relays_reply() {
    let (url, seen) = spawn_backend(StatusCode::OK, r#"{"conversation_id":"c1"}"#).await;
    let router = create_router(ProxyState::new(reqwest::Client::new(), url));

    let response = router
        .oneshot(chat_request(r#"{"conversation_id":"","message":"hi"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(body_text(response).await, r#"{"conversation_id":"c1"}"#);
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        [r#"{"conversation_id":"","message":"hi"}"#.to_string()]
    );
}

#[tokio::test]
async fn relays_backend_error_status() {
    let (url, _) = spawn_backend(StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail":"boom"}"#).await;
    let router = create_router(ProxyState::new(reqwest::Client::new(), url));

    let response = router.oneshot(chat_request("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, r#"{"detail":"boom"}"#);
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let router = create_router(ProxyState::new(
        reqwest::Client::new(),
        format!("http://{}/chat", addr),
    ));

    let response = router.oneshot(chat_request("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Upstream error"));
}

#[tokio::test]
async fn health_reports_healthy() {
    let router = create_router(ProxyState::new(
        reqwest::Client::new(),
        "http://127.0.0.1:9/chat",
    ));

    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].as_i64().unwrap() > 0);
}
