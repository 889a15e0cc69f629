#![allow(dead_code)]

use axum::extract::ConnectInfo;
use chrono::{Duration, Utc};
use shortlink_registry::application::Telemetry;
use shortlink_registry::application::services::Registry;
use shortlink_registry::domain::entities::Entry;
use shortlink_registry::domain::log_event::LogEvent;
use shortlink_registry::domain::repositories::EntryStore;
use shortlink_registry::infrastructure::persistence::{InMemoryAccessLog, InMemoryEntryStore};
use shortlink_registry::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tower::Layer;

pub const BASE_URL: &str = "http://localhost:3001";

pub struct TestContext {
    pub state: AppState,
    pub store: Arc<InMemoryEntryStore>,
    pub telemetry_rx: mpsc::Receiver<LogEvent>,
}

pub fn create_test_state() -> TestContext {
    create_test_state_with_proxy(false)
}

pub fn create_test_state_with_proxy(behind_proxy: bool) -> TestContext {
    let (tx, rx) = mpsc::channel(100);
    let store = Arc::new(InMemoryEntryStore::new());

    let registry = Registry::new(
        store.clone(),
        Arc::new(InMemoryAccessLog::new()),
        Telemetry::new("backend", tx),
    );

    TestContext {
        state: AppState::new(Arc::new(registry), BASE_URL, behind_proxy),
        store,
        telemetry_rx: rx,
    }
}

/// Inserts an entry that expired a minute ago.
pub fn create_expired_entry(store: &InMemoryEntryStore, code: &str, url: &str) {
    let entry = Entry::new(
        code.to_string(),
        url.to_string(),
        Utc::now() - Duration::minutes(2),
        1,
    )
    .unwrap();

    store.insert(entry).unwrap();
}

pub fn drain_telemetry(rx: &mut mpsc::Receiver<LogEvent>) -> Vec<LogEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

pub const PEER_ADDR: &str = "127.0.0.1:12345";

/// Injects a fixed `ConnectInfo` so handlers can extract the peer address
/// without a real socket.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = PEER_ADDR.parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
