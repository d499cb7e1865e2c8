//! seclab core: scenario model, catalog, and error types.
//!
//! This crate holds the data contracts shared by the API service and its
//! tests. It carries no HTTP or runtime dependencies so the catalog and
//! result types can be reused by tooling that only needs to read scenario
//! files.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every fallible
//! path surfaces as `LabError`/`Result` so a bad data file is reported,
//! not crashed on.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod catalog;
pub mod error;
pub mod model;

/// Shared result type.
pub use error::{LabError, Result};
pub use catalog::ScenarioCatalog;
pub use model::{Analysis, RiskLevel, Scenario, SimulationResult};
