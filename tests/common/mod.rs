//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header::CONTENT_TYPE, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;

/// One request as seen by the mock ingest endpoint.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub content_type: Option<String>,
    pub tenant_header: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: &'static str,
    latency: Duration,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Handle to a running mock ingest endpoint.
pub struct MockIngest {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockIngest {
    pub fn url(&self) -> String {
        format!("http://{}/ingest", self.addr)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

/// Start a mock ingest endpoint answering every POST with a fixed status.
pub async fn start_mock_ingest(status: u16, body: &'static str) -> MockIngest {
    start_slow_mock_ingest(status, body, Duration::ZERO).await
}

/// Like [`start_mock_ingest`], but waits `latency` before answering.
pub async fn start_slow_mock_ingest(status: u16, body: &'static str, latency: Duration) -> MockIngest {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status: StatusCode::from_u16(status).unwrap(),
        body,
        latency,
        captured: captured.clone(),
    };

    let app = Router::new()
        .route("/ingest", post(ingest))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockIngest { addr, captured }
}

async fn ingest(State(state): State<MockState>, headers: HeaderMap, body: Bytes) -> (StatusCode, &'static str) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.captured.lock().unwrap().push(CapturedRequest {
        content_type: header(CONTENT_TYPE.as_str()),
        tenant_header: header("x-tenant-id"),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    if !state.latency.is_zero() {
        tokio::time::sleep(state.latency).await;
    }
    (state.status, state.body)
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
