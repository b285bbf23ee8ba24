//! Lifecycle tests against a real listener.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{Router, routing::get};
use qce_server::{AppState, ServerConfig, serve_router, serve_with_shutdown, with_layers};
use qce_shared::testing::init_test_tracing;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::{Notify, oneshot};

async fn start() -> (SocketAddr, oneshot::Sender<()>, tokio::task::JoinHandle<anyhow::Result<()>>) {
    init_test_tracing();
    let config = ServerConfig {
        shutdown_grace: Duration::from_secs(2),
        ..ServerConfig::default()
    };
    let state = Arc::new(AppState::with_config(config));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(serve_with_shutdown(listener, state, async move {
        let _ = rx.await;
    }));
    (addr, tx, handle)
}

#[tokio::test]
async fn test_serves_health_over_tcp() {
    let (addr, stop, handle) = start().await;

    let body: Value = reqwest::get(format!("http://{addr}/health"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json");
    assert_eq!(body["status"], "ok");

    stop.send(()).expect("server still running");
    handle.await.expect("join").expect("clean shutdown");
}

#[tokio::test]
async fn test_stops_accepting_after_shutdown() {
    let (addr, stop, handle) = start().await;

    stop.send(()).expect("server still running");
    handle.await.expect("join").expect("clean shutdown");

    let result = reqwest::get(format!("http://{addr}/health")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_shutdown_returns_after_grace_with_request_in_flight() {
    init_test_tracing();
    let started = Arc::new(Notify::new());
    let router = Router::new().route(
        "/slow",
        get({
            let started = started.clone();
            move || {
                let started = started.clone();
                async move {
                    started.notify_one();
                    tokio::time::sleep(Duration::from_secs(30)).await;
                    "done"
                }
            }
        }),
    );
    let app = with_layers(router, Duration::from_secs(60));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (stop, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(serve_router(
        listener,
        app,
        Duration::from_millis(200),
        async move {
            let _ = rx.await;
        },
    ));

    let request = tokio::spawn(reqwest::get(format!("http://{addr}/slow")));
    started.notified().await;

    stop.send(()).expect("server still running");
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("serve returned within the grace period")
        .expect("join");
    assert!(result.is_ok());

    request.abort();
}
