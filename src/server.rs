//! HTTP server runtime
//!
//! Owns the store and interpreter for the lifetime of the process and
//! serves the API until the shutdown future resolves.

use crate::api::build_app;
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::strings::StringsState;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// String Analyzer HTTP server
pub struct Server {
    config: AnalyzerConfig,
    state: StringsState,
}

impl Server {
    /// Create a server with an empty store
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: StringsState::new()?,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Shared handler state
    pub fn state(&self) -> &StringsState {
        &self.state
    }

    /// Bind the configured address and serve until `shutdown` resolves
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.server.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already-bound listener
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local: SocketAddr = listener.local_addr()?;
        let app = build_app(self.state, &self.config.cors.origins);

        tracing::info!(address = %local, "String Analyzer API listening");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("String Analyzer API stopped");
        Ok(())
    }
}

/// Builder for [`Server`]
pub struct ServerBuilder {
    config: AnalyzerConfig,
}

impl ServerBuilder {
    /// Create a new builder with default config
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
        }
    }

    /// Set the configuration
    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the listen host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.server.host = host.into();
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    /// Build the server
    pub fn build(self) -> Result<Server> {
        Server::new(self.config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
