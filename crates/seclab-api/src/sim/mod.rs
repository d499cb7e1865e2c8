//! Canned scenario simulation.
//!
//! A simulation performs no real work: it waits for the configured
//! artificial delay and then stamps a `SimulationResult` with a fresh id and
//! the current time. The wait goes through the `Delay` trait so tests can
//! swap in a delay that returns immediately.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use uuid::Uuid;

use seclab_core::{Scenario, SimulationResult};

/// Suspends the current request for the given duration.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Timer-backed delay; yields to the runtime while waiting.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

pub struct Simulator {
    delay: Duration,
    pause: Arc<dyn Delay>,
}

impl Simulator {
    pub fn new(delay: Duration) -> Self {
        Self::with_delay(delay, Arc::new(TokioDelay))
    }

    pub fn with_delay(delay: Duration, pause: Arc<dyn Delay>) -> Self {
        Self { delay, pause }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn run(&self, scenario: &Scenario) -> SimulationResult {
        self.pause.wait(self.delay).await;
        let result = SimulationResult::new(scenario, next_simulation_id(), unix_timestamp());
        tracing::debug!(
            scenario_id = %scenario.id,
            simulation_id = %result.simulation_id,
            risk_level = result.analysis.risk_level.as_str(),
            "simulation finished"
        );
        result
    }
}

/// `sim_` followed by a time-ordered UUIDv7, unique across concurrent requests.
pub fn next_simulation_id() -> String {
    format!("sim_{}", Uuid::now_v7().simple())
}

/// Seconds since the Unix epoch with sub-second precision.
pub fn unix_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}
