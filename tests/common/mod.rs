use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use fake::Fake;
use fake::faker::internet::en::Username;
use serde_json::Value;
use srms::srms_auth::{MemorySessionStore, SharedSession};
use srms::srms_config::ApiConfig;
use srms::state::AppState;

/// A request as seen by the mock backend.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

#[allow(dead_code)]
impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Debug, Clone)]
struct Reply {
    status: u16,
    body: String,
}

#[derive(Default)]
struct Inner {
    routes: HashMap<(String, String), VecDeque<Reply>>,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<Inner>>;

/// Scripted stand-in for the SRMS backend.
///
/// Replies are queued per `(method, path)`; the last queued reply repeats.
/// Unscripted routes answer 404 `{"detail": "Not Found"}`.
pub struct MockBackend {
    pub base_url: String,
    inner: Shared,
}

#[allow(dead_code)]
impl MockBackend {
    pub async fn start() -> Self {
        let inner = Shared::default();
        let app = Router::new().fallback(handle).with_state(inner.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            inner,
        }
    }

    pub fn reply_json(&self, method: &str, path: &str, status: u16, body: Value) -> &Self {
        self.push(method, path, status, body.to_string())
    }

    pub fn reply_text(&self, method: &str, path: &str, status: u16, body: &str) -> &Self {
        self.push(method, path, status, body.to_string())
    }

    fn push(&self, method: &str, path: &str, status: u16, body: String) -> &Self {
        self.inner
            .lock()
            .unwrap()
            .routes
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back(Reply { status, body });
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// `"METHOD /path"` of every request, in arrival order.
    pub fn calls(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }

    pub fn app_state(&self, session: SharedSession) -> AppState {
        AppState::new(ApiConfig::new(&self.base_url), session).unwrap()
    }

    pub fn anonymous_state(&self) -> AppState {
        self.app_state(MemorySessionStore::new().shared())
    }

    pub fn signed_in_state(&self, token: &str) -> AppState {
        self.app_state(MemorySessionStore::with_token(token).shared())
    }
}

async fn handle(State(inner): State<Shared>, request: Request) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_string);
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(request.into_body(), usize::MAX).await.unwrap();

    let mut inner = inner.lock().unwrap();
    inner.requests.push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query,
        authorization,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let reply = match inner.routes.get_mut(&(method, path)) {
        Some(queue) if queue.len() > 1 => queue.pop_front(),
        Some(queue) => queue.front().cloned(),
        None => None,
    };

    match reply {
        Some(reply) => (
            StatusCode::from_u16(reply.status).unwrap(),
            [(header::CONTENT_TYPE, "application/json")],
            reply.body,
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"detail":"Not Found"}"#,
        )
            .into_response(),
    }
}

/// Base URL of a port nothing listens on.
#[allow(dead_code)]
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[allow(dead_code)]
pub fn generate_username() -> String {
    let name: String = Username().fake();
    format!("{}_{}", name, std::process::id())
}
