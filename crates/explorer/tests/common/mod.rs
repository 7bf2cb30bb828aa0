//! Shared test harness: a loopback fake of the Jupyter Contents API plus
//! helpers for building connected sessions.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use jupyter_explorer::{Connection, Session};

pub const TOKEN: &str = "test-token";

/// In-memory Jupyter server double with per-verb request counters.
#[derive(Default)]
pub struct FakeJupyter {
    files: Mutex<HashMap<String, Value>>,
    listings: Mutex<HashMap<String, Value>>,
    gets: AtomicUsize,
    puts: AtomicUsize,
    deletes: AtomicUsize,
}

impl FakeJupyter {
    pub fn insert_file(&self, path: &str, content: Value) {
        self.files.lock().unwrap().insert(path.to_string(), content);
    }

    pub fn insert_listing(&self, path: &str, entries: Value) {
        self.listings
            .lock()
            .unwrap()
            .insert(path.to_string(), entries);
    }

    pub fn file(&self, path: &str) -> Option<Value> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub fn total_requests(&self) -> usize {
        self.gets() + self.puts() + self.deletes()
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("token {TOKEN}"))
}

async fn get_contents(
    State(state): State<Arc<FakeJupyter>>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.gets.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return (StatusCode::FORBIDDEN, Json(json!({"message": "bad token"})));
    }
    if let Some(entries) = state.listings.lock().unwrap().get(&path) {
        let body = json!({"name": path, "path": path, "type": "directory", "content": entries});
        return (StatusCode::OK, Json(body));
    }
    if let Some(content) = state.files.lock().unwrap().get(&path) {
        let body = json!({"name": path, "path": path, "type": "file", "content": content});
        return (StatusCode::OK, Json(body));
    }
    (
        StatusCode::NOT_FOUND,
        Json(json!({"message": "No such file or directory"})),
    )
}

async fn put_contents(
    State(state): State<Arc<FakeJupyter>>,
    Path(path): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.puts.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return (StatusCode::FORBIDDEN, Json(json!({"message": "bad token"})));
    }
    state
        .files
        .lock()
        .unwrap()
        .insert(path.clone(), body["content"].clone());
    (
        StatusCode::CREATED,
        Json(json!({"name": path, "path": path, "type": "file"})),
    )
}

async fn delete_contents(
    State(state): State<Arc<FakeJupyter>>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.deletes.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return (StatusCode::FORBIDDEN, Json(json!({"message": "bad token"}))).into_response();
    }
    if state.files.lock().unwrap().remove(&path).is_none() {
        return (StatusCode::NOT_FOUND, Json(json!({"message": "No such file"}))).into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

/// Serve the fake on a random loopback port; returns its base URL.
pub async fn spawn(state: Arc<FakeJupyter>) -> String {
    let app = Router::new()
        .route(
            "/api/contents/*path",
            get(get_contents).put(put_contents).delete(delete_contents),
        )
        .with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A session already connected to the fake server.
pub fn connected_session(server_url: &str, remote_root: &str) -> Session {
    let session = Session::new();
    session
        .set_connection(Connection {
            server_url: server_url.to_string(),
            token: TOKEN.to_string(),
            remote_root: remote_root.to_string(),
        })
        .unwrap();
    session
}
