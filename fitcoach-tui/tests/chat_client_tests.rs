use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use fitcoach_core::wire::ChatResponse;
use fitcoach_core::{ChatSession, Role};
use fitcoach_tui::api_client::{ApiClientError, ChatClient};
use fitcoach_tui::config::TuiConfig;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Clone)]
enum Script {
    Json(Value),
    Status(StatusCode, &'static str),
    Garbage,
}

#[derive(Clone)]
struct Backend {
    script: Script,
    seen: Arc<Mutex<Vec<String>>>,
}

async fn chat(State(backend): State<Backend>, body: String) -> axum::response::Response {
    backend.seen.lock().unwrap().push(body);
    match backend.script {
        Script::Json(value) => Json(value).into_response(),
        Script::Status(status, text) => (status, text).into_response(),
        Script::Garbage => (
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            "{not json",
        )
            .into_response(),
    }
}

/// Serve a scripted `/chat` on an ephemeral port; returns the URL and the
/// captured request bodies.
async fn spawn_backend(script: Script) -> (String, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().route("/chat", post(chat)).with_state(Backend {
        script,
        seen: Arc::clone(&seen),
    });
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}/chat", addr), seen)
}

fn client_for(url: &str) -> ChatClient {
    let config = TuiConfig {
        chat_url: url.to_string(),
        ..TuiConfig::default()
    };
    ChatClient::new(&config).unwrap()
}

#[tokio::test]
async fn posts_exact_body_and_parses_response() {
    let (url, seen) = spawn_backend(Script::Json(json!({
        "conversation_id": "c1",
        "current_agent": "Main Planner",
        "messages": [{"content": "Let's plan.", "agent": "Main Planner"}]
    })))
    .await;
    let client = client_for(&url);

    let response = client.call_chat("book a flight", "c1").await.unwrap();

    assert_eq!(response.conversation_id.as_deref(), Some("c1"));
    assert_eq!(response.messages.unwrap()[0].content, "Let's plan.");
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        [r#"{"conversation_id":"c1","message":"book a flight"}"#.to_string()]
    );
}

#[tokio::test]
async fn server_error_yields_none() {
    let (url, seen) = spawn_backend(Script::Status(
        StatusCode::INTERNAL_SERVER_ERROR,
        "server error",
    ))
    .await;
    let client = client_for(&url);

    assert!(client.call_chat("hello", "c1").await.is_none());
    assert_eq!(seen.lock().unwrap().len(), 1, "exactly one attempt");

    match client.try_call_chat("hello", "c1").await {
        Err(ApiClientError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "server error");
        }
        other => panic!("expected status error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn malformed_json_yields_none() {
    let (url, _) = spawn_backend(Script::Garbage).await;
    assert!(client_for(&url).call_chat("hi", "").await.is_none());
}

#[tokio::test]
async fn unreachable_backend_yields_none() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = client_for(&format!("http://{}/chat", addr));
    assert!(client.call_chat("hi", "").await.is_none());
}

#[tokio::test]
async fn server_error_after_submit_keeps_user_message() {
    let (url, _) = spawn_backend(Script::Status(
        StatusCode::INTERNAL_SERVER_ERROR,
        "server error",
    ))
    .await;
    let client = client_for(&url);
    let mut session = ChatSession::new();

    let request = session.begin_submit("plan my week");
    assert_eq!(session.messages().len(), 1);
    let reply: Option<ChatResponse> = client.send(&request).await;
    session.apply_reply(reply);

    assert!(!session.is_loading());
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role, Role::User);
}

#[tokio::test]
async fn boot_then_submit_round_trip() {
    let (url, seen) = spawn_backend(Script::Json(json!({
        "conversation_id": "c1",
        "current_agent": "triage",
        "context": {},
        "events": [{"type": "message", "agent": "triage", "content": "hi"}],
        "messages": [{"content": "hi"}]
    })))
    .await;
    let client = client_for(&url);
    let mut session = ChatSession::new();

    let boot = client.send(&session.boot_request()).await;
    session.apply_boot(boot);
    let request = session.begin_submit("book a flight");
    let reply = client.send(&request).await;
    session.apply_reply(reply);

    let bodies = seen.lock().unwrap().clone();
    assert_eq!(bodies[0], r#"{"conversation_id":"","message":""}"#);
    assert_eq!(bodies[1], r#"{"conversation_id":"c1","message":"book a flight"}"#);
    assert_eq!(session.messages().len(), 3);
    assert_eq!(session.events().len(), 2);
    assert_eq!(session.conversation_id(), Some("c1"));
}
