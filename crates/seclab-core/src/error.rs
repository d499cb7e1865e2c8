//! Shared error type across seclab crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// Requested record does not exist.
    NotFound,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, LabError>;

/// Unified error type used by core and api.
#[derive(Debug, Error)]
pub enum LabError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("scenario not found: {0}")]
    ScenarioNotFound(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl LabError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            LabError::BadRequest(_) => ClientCode::BadRequest,
            LabError::ScenarioNotFound(_) => ClientCode::NotFound,
            LabError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            LabError::Internal(_) => ClientCode::Internal,
        }
    }
}
