//! Axum router wiring.
//!
//! All routes live under `/api`. CORS is open to any origin.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::{app_state::AppState, handlers, ops};

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(ops::health))
        .route("/metrics", get(ops::metrics))
        .route("/scenarios", get(handlers::list_scenarios))
        .route("/simulate/:scenario_id", post(handlers::simulate));

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
