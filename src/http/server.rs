//! HTTP Server
//!
//! Binds the configured address and serves the router until shutdown.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::Result;
use crate::store::AnimalStore;

use super::router::build_router;

/// HTTP server for Zookeepr
pub struct Server {
    config: Config,
    store: Arc<AnimalStore>,
}

impl Server {
    /// Create a new server with the given config and store
    pub fn new(config: Config, store: Arc<AnimalStore>) -> Self {
        Self { config, store }
    }

    /// Build the router (useful for testing)
    pub fn router(&self) -> Router {
        build_router(&self.config, Arc::clone(&self.store))
    }

    /// Bind the configured address and serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.listen_addr).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `signal` resolves
    pub async fn serve<F>(self, listener: TcpListener, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!("API server now on port {}!", addr.port());

        axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("Server on {} stopped", addr);
        Ok(())
    }
}

/// Resolves on Ctrl+C
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => {
            // Without a signal handler, keep serving
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
