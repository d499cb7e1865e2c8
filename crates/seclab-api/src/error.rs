//! HTTP mapping for `LabError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use seclab_core::error::{ClientCode, LabError};

/// Handler error. Wraps `LabError` so it can be turned into a response here.
#[derive(Debug)]
pub struct ApiError(pub LabError);

impl From<LabError> for ApiError {
    fn from(e: LabError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self.0.client_code() {
            ClientCode::NotFound => (StatusCode::NOT_FOUND, "Scenario not found".to_string()),
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            ClientCode::Internal => {
                tracing::error!(error = %self.0, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };
        (status, Json(json!({ "error": msg }))).into_response()
    }
}
