use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;
pub mod mcp;
pub mod smoke;

use config::MCP_PATH;
use domain::{catalog::Catalog, random::RandomSource};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub random: Arc<dyn RandomSource>,
}

impl AppState {
    pub fn new(catalog: Catalog, random: Arc<dyn RandomSource>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            random,
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(http::handlers::health))
        .route("/.well-known/mcp", get(http::handlers::discovery))
        .route(MCP_PATH, post(http::handlers::mcp_endpoint))
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
