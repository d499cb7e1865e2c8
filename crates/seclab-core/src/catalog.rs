//! Load-once scenario catalog.
//!
//! The catalog is read from a JSON array at startup and never mutated
//! afterwards. Callers share it behind an `Arc`; reads need no locking.
//!
//! Each record is kept twice: the object exactly as it appeared in the file
//! (key order and unknown fields included) for listing, and a typed
//! `Scenario` for lookup and simulation.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{LabError, Result};
use crate::model::Scenario;

#[derive(Debug, Clone, Default)]
pub struct ScenarioCatalog {
    records: Vec<Map<String, Value>>,
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|e| {
            LabError::Internal(format!("read scenarios failed ({}): {e}", path.display()))
        })?;
        let catalog = Self::load_from_str(&s)?;
        tracing::debug!(path = %path.display(), count = catalog.len(), "scenario catalog loaded");
        Ok(catalog)
    }

    pub fn load_from_str(s: &str) -> Result<Self> {
        let records: Vec<Map<String, Value>> = serde_json::from_str(s)
            .map_err(|e| LabError::Internal(format!("invalid scenarios json: {e}")))?;

        let scenarios = records
            .iter()
            .enumerate()
            .map(|(i, rec)| {
                serde_json::from_value(Value::Object(rec.clone())).map_err(|e| {
                    LabError::Internal(format!("invalid scenario at index {i}: {e}"))
                })
            })
            .collect::<Result<Vec<Scenario>>>()?;

        Ok(Self { records, scenarios })
    }

    /// All records in source order, typed.
    pub fn all(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// All records in source order, exactly as read from the file.
    pub fn records(&self) -> &[Map<String, Value>] {
        &self.records
    }

    /// First record whose id matches exactly. Linear scan; the catalog is small.
    pub fn find(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Like `find`, but a miss is a `ScenarioNotFound` error.
    pub fn get(&self, id: &str) -> Result<&Scenario> {
        self.find(id)
            .ok_or_else(|| LabError::ScenarioNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
