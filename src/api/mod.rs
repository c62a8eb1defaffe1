pub mod errors;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::A11yConfig;
use crate::scan::{build_provider, ScanProvider};

/// Shared per-process state. Everything here is immutable after startup;
/// requests carry no cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<A11yConfig>,
    pub client: reqwest::Client,
    pub provider: Arc<dyn ScanProvider>,
}

pub fn create_app_state(config: A11yConfig) -> AppState {
    let client = reqwest::Client::new();
    let provider = build_provider(&config, client.clone());
    AppState {
        config: Arc::new(config),
        client,
        provider,
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route(
            "/api/accessibility-check",
            axum::routing::post(routes::check::accessibility_check),
        )
        .route(
            "/api/cost-estimate",
            axum::routing::post(routes::estimate::cost_estimate),
        )
        .route("/api/glossary", axum::routing::get(routes::glossary::search_glossary))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
