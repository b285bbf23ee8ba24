//! Axum server setup, routing and lifecycle.

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header},
    middleware,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
};
use tracing::{info, warn};

use crate::api;
use crate::middleware::{auth::authenticate, request_log::log_requests};
use crate::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let reserved = api::reserved::not_implemented;

    // Versioned API routes
    let api_routes = Router::new()
        // Auth
        .route("/auth/login", post(reserved))
        .route("/auth/logout", post(reserved))
        // Circuits
        .route("/circuits", get(reserved).post(reserved))
        .route(
            "/circuits/{id}",
            get(reserved).put(reserved).delete(reserved),
        )
        // Simulation and export
        .route("/simulate", post(reserved))
        .route("/export/qasm", post(reserved));

    // Routes that need an authenticated user
    let protected_routes = Router::new()
        .route("/me", get(api::users::current_user))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let page_routes = Router::new()
        .route("/", get(api::index::index))
        .route("/index.html", get(api::index::index))
        .route("/health", get(api::health::health));

    let request_timeout = state.config.request_timeout;

    let app = Router::new()
        .nest("/api/v1", api_routes.merge(protected_routes))
        .merge(page_routes)
        .fallback(api::reserved::not_found);

    with_layers(app, request_timeout).with_state(state)
}

/// Wrap a router in the service-wide layer stack.
///
/// Outermost first: request logging, request timeout (408), CORS, gzip
/// compression.
pub fn with_layers<S>(router: Router<S>, request_timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CompressionLayer::new())
        // TODO: restrict origins once the front end has a fixed deployment host
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::from_fn(log_requests))
}

/// Bind to the configured address and serve until Ctrl-C or SIGTERM.
pub async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(state.config.bind_address()).await?;
    serve_with_shutdown(listener, state, shutdown_signal()).await
}

/// Serve on `listener` until `signal` resolves, then drain.
///
/// In-flight requests get `config.shutdown_grace` to finish; after that the
/// server task is aborted and this returns anyway.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    signal: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let grace = state.config.shutdown_grace;
    let app = create_router(state);
    serve_router(listener, app, grace, signal).await
}

/// Serve an already built router on `listener` until `signal` resolves.
///
/// After the signal the server stops accepting and waits up to `grace` for
/// in-flight requests. If they are still running then, the server task is
/// aborted and this returns `Ok`.
pub async fn serve_router<F>(
    listener: TcpListener,
    app: Router,
    grace: Duration,
    signal: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;

    let (stop_tx, mut stop_rx) = watch::channel(false);
    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        let _ = stop_rx.changed().await;
    });

    info!(addr = %addr, "Server starting");
    let mut handle = tokio::spawn(server.into_future());

    tokio::select! {
        res = &mut handle => {
            res??;
            return Ok(());
        }
        () = signal => {}
    }

    info!("Shutting down server...");
    let _ = stop_tx.send(true);

    match tokio::time::timeout(grace, &mut handle).await {
        Ok(res) => {
            res??;
            info!("Server gracefully stopped");
        }
        Err(_) => {
            warn!(grace_secs = grace.as_secs(), "Server shutdown timed out");
            handle.abort();
        }
    }
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn slow_app(request_timeout: Duration) -> Router {
        let router = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                "done"
            }),
        );
        with_layers(router, request_timeout)
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_request_times_out() {
        let response = slow_app(Duration::from_millis(50))
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_request_within_timeout_succeeds() {
        let response = slow_app(Duration::from_secs(60))
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
