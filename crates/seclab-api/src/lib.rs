//! seclab API library entry.
//!
//! Wires the scenario catalog, simulator, and metrics registry into an axum
//! router. Consumed by the binary (`main.rs`) and by integration tests,
//! which build a fresh `AppState` per test.

pub mod app_state;
pub mod config;
pub mod error;
pub mod handlers;
pub mod obs;
pub mod ops;
pub mod router;
pub mod sim;
