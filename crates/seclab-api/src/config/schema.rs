use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use seclab_core::error::{LabError, Result};

const MAX_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub scenarios: ScenariosSection,

    #[serde(default)]
    pub simulation: SimulationSection,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            scenarios: ScenariosSection::default(),
            simulation: SimulationSection::default(),
        }
    }
}

impl LabConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(LabError::UnsupportedVersion);
        }
        self.server.validate()?;
        self.scenarios.validate()?;
        self.simulation.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            LabError::BadRequest(format!(
                "server.listen must be a valid SocketAddr (got {:?})",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenariosSection {
    #[serde(default = "default_scenarios_path")]
    pub path: String,
}

impl Default for ScenariosSection {
    fn default() -> Self {
        Self { path: default_scenarios_path() }
    }
}

impl ScenariosSection {
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(LabError::BadRequest("scenarios.path must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationSection {
    /// Artificial processing time added to every successful simulation.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self { delay_ms: default_delay_ms() }
    }
}

impl SimulationSection {
    pub fn validate(&self) -> Result<()> {
        if self.delay_ms > MAX_DELAY_MS {
            return Err(LabError::BadRequest(format!(
                "simulation.delay_ms must be between 0 and {MAX_DELAY_MS}"
            )));
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn default_listen() -> String {
    "0.0.0.0:5000".into()
}
fn default_scenarios_path() -> String {
    "scenarios/scenarios.json".into()
}
fn default_delay_ms() -> u64 {
    100
}
