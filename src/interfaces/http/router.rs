use super::handlers;
use crate::application::service::MerchantService;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MerchantService>,
}

impl AppState {
    pub fn new(service: MerchantService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/deposit", post(handlers::deposit))
        .route("/api/v1/status", get(handlers::status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
