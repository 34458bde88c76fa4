//! HTTP server setup.
//!
//! # Responsibilities
//! - Create Axum Router with the demo handlers
//! - Wire up request tracing
//! - Bind server to listener and shut down gracefully

use axum::{
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::demo::{DemoRunner, Network};
use crate::http::handlers::{health, run_demo};

/// Application state injected into handlers.
pub struct AppState<N> {
    pub runner: Arc<DemoRunner<N>>,
}

impl<N> Clone for AppState<N> {
    fn clone(&self) -> Self {
        Self {
            runner: self.runner.clone(),
        }
    }
}

/// HTTP surface for the demo runner.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around a runner.
    pub fn new<N: Network + 'static>(runner: DemoRunner<N>) -> Self {
        let state = AppState {
            runner: Arc::new(runner),
        };
        Self {
            router: Self::build_router(state),
        }
    }

    fn build_router<N: Network + 'static>(state: AppState<N>) -> Router {
        Router::new()
            .route("/api/run-demo", post(run_demo::<N>))
            .route("/health", get(health))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Serve until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
