//! HTTP server startup logic.
//!
//! The service speaks plain HTTP; TLS termination is the ingress's job.

use std::net::SocketAddr;

use axum::Router;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[source] std::io::Error),

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Start the HTTP server on the given address.
///
/// This function blocks until the server shuts down. Shutdown is graceful:
/// on SIGTERM or Ctrl+C the server stops accepting new connections and
/// drains the ones in flight.
pub async fn start_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(%addr, "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}
