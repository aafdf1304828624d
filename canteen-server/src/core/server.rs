//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::future::IntoFuture;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::core::{Config, Result, ServerError, ServerState};
use crate::services::build_router;

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Bind, serve until Ctrl-C, then drain in-flight requests
    ///
    /// Draining is bounded by `shutdown_timeout_ms`; connections still open
    /// after that are dropped.
    pub async fn run(&self) -> Result<()> {
        let app = build_router(self.state.clone());

        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        tracing::info!("🍱 Canteen server listening on {}", addr);

        let shutdown_started = Arc::new(Notify::new());
        let signal = {
            let shutdown_started = shutdown_started.clone();
            async move {
                shutdown_signal().await;
                shutdown_started.notify_one();
            }
        };
        let serve = axum::serve(listener, app)
            .with_graceful_shutdown(signal)
            .into_future();

        let shutdown_timeout = self.config.shutdown_timeout();
        let deadline = async {
            shutdown_started.notified().await;
            tokio::time::sleep(shutdown_timeout).await;
        };

        tokio::select! {
            result = serve => result.map_err(ServerError::Serve)?,
            _ = deadline => {
                tracing::warn!(
                    timeout_ms = self.config.shutdown_timeout_ms,
                    "Graceful shutdown timed out, dropping open connections"
                );
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
