//! Shared application state for the API service.
//!
//! Everything a handler touches is built once at startup and injected
//! through axum's `State`: the read-only scenario catalog, the metrics
//! registry, and the simulator. Tests construct their own instance with
//! `from_parts` instead of reading files.

use std::sync::Arc;

use seclab_core::error::Result;
use seclab_core::ScenarioCatalog;

use crate::config::LabConfig;
use crate::obs::ApiMetrics;
use crate::sim::Simulator;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: LabConfig,
    catalog: ScenarioCatalog,
    metrics: ApiMetrics,
    simulator: Simulator,
}

impl AppState {
    /// Build application state, loading the scenario file named by the config.
    /// A missing or malformed file is returned as an error; the service must
    /// not start without its catalog.
    pub fn new(cfg: LabConfig) -> Result<Self> {
        let catalog = ScenarioCatalog::load_from_file(&cfg.scenarios.path)?;
        if catalog.is_empty() {
            tracing::warn!(path = %cfg.scenarios.path, "scenario catalog is empty");
        }
        let simulator = Simulator::new(cfg.simulation.delay());
        Ok(Self::from_parts(cfg, catalog, simulator))
    }

    pub fn from_parts(cfg: LabConfig, catalog: ScenarioCatalog, simulator: Simulator) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                catalog,
                metrics: ApiMetrics::new(),
                simulator,
            }),
        }
    }

    pub fn cfg(&self) -> &LabConfig {
        &self.inner.cfg
    }

    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.inner.catalog
    }

    pub fn metrics(&self) -> &ApiMetrics {
        &self.inner.metrics
    }

    pub fn simulator(&self) -> &Simulator {
        &self.inner.simulator
    }
}
