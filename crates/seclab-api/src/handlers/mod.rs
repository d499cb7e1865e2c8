//! Scenario endpoints.
//!
//! Both handlers record `http_requests_total` and
//! `http_request_duration_seconds` after the response is built, so the
//! `status` label is the status actually returned.

use std::time::Instant;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

use seclab_core::SimulationResult;

use crate::app_state::AppState;
use crate::error::ApiError;

pub const SCENARIOS_ENDPOINT: &str = "/scenarios";
pub const SIMULATE_ENDPOINT: &str = "/simulate";

pub async fn list_scenarios(State(state): State<AppState>) -> Response {
    let started = Instant::now();
    let resp = Json(state.catalog().records()).into_response();
    state.metrics().record_request(
        "GET",
        SCENARIOS_ENDPOINT,
        resp.status().as_u16(),
        started.elapsed(),
    );
    resp
}

pub async fn simulate(State(state): State<AppState>, Path(scenario_id): Path<String>) -> Response {
    let started = Instant::now();
    let resp = run_simulation(&state, &scenario_id).await.into_response();
    state.metrics().record_request(
        "POST",
        SIMULATE_ENDPOINT,
        resp.status().as_u16(),
        started.elapsed(),
    );
    resp
}

async fn run_simulation(
    state: &AppState,
    scenario_id: &str,
) -> Result<Json<SimulationResult>, ApiError> {
    let scenario = state.catalog().get(scenario_id).inspect_err(|_| {
        tracing::debug!(%scenario_id, "simulate: unknown scenario");
    })?;

    let _in_flight = state.metrics().simulation_started();
    let result = state.simulator().run(scenario).await;
    Ok(Json(result))
}
