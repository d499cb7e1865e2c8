//! Scenario records and the per-request simulation result.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Scenario `type` that is classified as high risk.
pub const SECURITY_KIND: &str = "security";

/// Recommendations attached to every analysis.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Increase monitoring",
    "Review logs",
    "Check resource usage",
];

/// Typed view of a scenario record. Fields other than these four are
/// ignored here; the catalog keeps the untouched record alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Opaque payload, passed through as-is.
    pub metrics: Map<String, Value>,
}

impl Scenario {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::for_kind(&self.kind)
    }
}

/// Two-valued risk classification derived from the scenario type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
}

impl RiskLevel {
    pub fn for_kind(kind: &str) -> Self {
        if kind == SECURITY_KIND {
            RiskLevel::High
        } else {
            RiskLevel::Medium
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

impl Analysis {
    pub fn for_scenario(scenario: &Scenario) -> Self {
        Self {
            risk_level: scenario.risk_level(),
            recommendations: RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Response body of a simulation. Built per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Display name of the simulated scenario.
    pub scenario: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub metrics: Map<String, Value>,
    pub simulation_id: String,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
    pub analysis: Analysis,
}

impl SimulationResult {
    pub fn new(scenario: &Scenario, simulation_id: String, timestamp: f64) -> Self {
        Self {
            scenario: scenario.name.clone(),
            kind: scenario.kind.clone(),
            metrics: scenario.metrics.clone(),
            simulation_id,
            timestamp,
            analysis: Analysis::for_scenario(scenario),
        }
    }
}
