//! Server startup.
//!
//! Binding happens before anything else is reported ready: if the port is
//! already in use the process must fail fast and visibly, never answering a
//! health probe. Readiness is flipped only after the listener is held.

use std::io;
use std::net::SocketAddr;

use axum::Router;

use crate::state::AppState;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid http.host or http.port: {0}")]
    InvalidAddr(#[from] std::net::AddrParseError),

    #[error("Failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },

    #[error("Server error: {0}")]
    Serve(io::Error),
}

/// Bind the configured endpoint and serve until shutdown.
///
/// This function blocks until the server drains and shuts down. A bind
/// failure returns immediately; the caller exits non-zero.
pub async fn start_server(app: Router, state: AppState) -> Result<(), ServerError> {
    let addr: SocketAddr =
        format!("{}:{}", state.config.http.host, state.config.http.port).parse()?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!(addr = %local_addr, "Listening");

    // Storage was verified before we were called and the endpoint is now
    // bound, so the health endpoint may start answering 200.
    state.mark_ready();
    tracing::info!("Service ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::routes::create_router;

    #[tokio::test]
    async fn bind_conflict_fails_fast() {
        // Occupy a port, then ask the server to bind it
        let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = occupied.local_addr().unwrap().port();

        let mut config = AppConfig::default();
        config.http.host = "127.0.0.1".to_string();
        config.http.port = port;

        let state = AppState::new(config);
        let app = create_router(state.clone());

        let err = start_server(app, state.clone()).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { .. }));
        // A failed bind must never report ready
        assert!(!state.is_ready());
    }
}
