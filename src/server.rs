use std::net::SocketAddr;

use crate::config::Config;
use crate::error::AppError;
use crate::proxy::HttpProxyService;
use crate::routes::{self, AppState};

/// Runs the proxy server until the process is stopped.
pub async fn serve(config: &Config) -> Result<(), AppError> {
    tracing::info!("Starting Fake Postman backend on port {}", config.port);

    let state = AppState::new(HttpProxyService::arc(config.upstream_timeout)?);
    let app = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Internal(format!("failed to bind {}: {}", addr, e)))?;

    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))
}
