pub mod health;
pub mod proxy;
pub mod static_files;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::proxy::ProxyService;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<dyn ProxyService>,
}

impl AppState {
    pub fn new(proxy: Arc<dyn ProxyService>) -> Self {
        Self { proxy }
    }
}

/// Builds the application router: health, proxy execution and the embedded UI.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/proxy/execute", post(proxy::execute))
        .fallback(static_files::serve_static)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
