pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::math::Operation;
use state::AppState;

/// Build the gateway router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(Operation::Add.path(), get(handlers::add))
        .route(Operation::Subtract.path(), get(handlers::subtract))
        .route(Operation::Multiply.path(), get(handlers::multiply))
        .route("/health", get(handlers::health_check))
        .route("/api-docs/openapi.json", get(handlers::openapi_json))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// A bound, not yet running, HTTP gateway.
pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    /// Bind the listening socket. Fails if the address is in use.
    pub async fn bind(config: &GatewayConfig) -> anyhow::Result<Self> {
        let addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind gateway to {}", addr))?;

        let state = Arc::new(AppState::new(config.input_policy));
        Ok(Self {
            listener,
            router: build_router(state),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run(self) -> anyhow::Result<()> {
        self.run_until(wait_for_shutdown()).await
    }

    /// Serve until `shutdown` completes, then drain in-flight requests.
    pub async fn run_until<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        tracing::info!("Gateway listening on http://{}", addr);
        tracing::info!("OpenAPI document: http://{}/api-docs/openapi.json", addr);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .context("gateway server error")?;

        tracing::info!("Gateway stopped");
        Ok(())
    }
}

async fn wait_for_shutdown() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(%e, "Error handling Ctrl+C signal");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut handler) => {
                handler.recv().await;
            }
            Err(e) => {
                tracing::error!(%e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received, initiating graceful shutdown");
}
