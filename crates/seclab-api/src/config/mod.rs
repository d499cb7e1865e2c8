//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use seclab_core::error::{LabError, Result};

pub use schema::{LabConfig, ScenariosSection, ServerSection, SimulationSection};

/// Config file read when `SECLAB_CONFIG` is unset.
pub const DEFAULT_PATH: &str = "seclab.yaml";

/// Environment variable naming an explicit config file.
pub const PATH_ENV: &str = "SECLAB_CONFIG";

pub fn load_from_file(path: &str) -> Result<LabConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| LabError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<LabConfig> {
    let cfg: LabConfig = serde_yaml::from_str(s)
        .map_err(|e| LabError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
/// A file that exists but fails to parse or validate is still an error.
pub fn load_or_default(path: &str) -> Result<LabConfig> {
    if Path::new(path).exists() {
        tracing::info!(%path, "loading config");
        load_from_file(path)
    } else {
        tracing::info!(%path, "config file not found, using defaults");
        let cfg = LabConfig::default();
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Resolve the startup config. An explicitly named file must exist and
/// parse; only the implicit `seclab.yaml` may be absent.
pub fn load(explicit: Option<&str>) -> Result<LabConfig> {
    match explicit {
        Some(path) => {
            tracing::info!(%path, "loading config from {PATH_ENV}");
            load_from_file(path)
        }
        None => load_or_default(DEFAULT_PATH),
    }
}
