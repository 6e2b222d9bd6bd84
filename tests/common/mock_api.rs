//! Mock user API server for testing the HTTP client.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured alias change for assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedAlias {
    pub target_user: String,
    pub body: Value,
}

#[derive(Clone, Default)]
struct MockState {
    aliases: Arc<Mutex<Vec<CapturedAlias>>>,
}

/// Serves:
/// - `GET /api/users/bob` (profile with extra fields)
/// - `GET /api/users/broken` (500)
/// - `GET /api/users/{other}` (404)
/// - `POST /api/users/{name}/changeAlias` (200, or 403 for "locked")
pub struct MockUserApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockUserApi {
    pub async fn start() -> Self {
        let state = MockState::default();

        let app = Router::new()
            .route("/api/users/{name}", get(fetch_user))
            .route("/api/users/{name}/changeAlias", post(change_alias))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn captured_aliases(&self) -> Vec<CapturedAlias> {
        self.state.aliases.lock().await.clone()
    }
}

impl Drop for MockUserApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn fetch_user(Path(name): Path<String>) -> Response {
    match name.as_str() {
        "bob" => Json(json!({
            "name": "bob",
            "avatar": "https://cdn.example.com/bob.png",
            "id": 42,
            "thumbnail": "https://cdn.example.com/bob-thumb.png",
            "timezone": "America/New_York",
            "currency": "USD",
            "theme": "LIGHT",
            "points": 12
        }))
        .into_response(),
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response(),
        _ => (StatusCode::NOT_FOUND, "").into_response(),
    }
}

async fn change_alias(
    State(state): State<MockState>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if name == "locked" {
        return (StatusCode::FORBIDDEN, "alias is locked").into_response();
    }
    state.aliases.lock().await.push(CapturedAlias {
        target_user: name,
        body,
    });
    StatusCode::OK.into_response()
}
