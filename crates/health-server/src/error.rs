//! Mapping from directory errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use health_records::HealthError;
use serde::Serialize;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "No result found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub fn invalid_id_message() -> String {
    format!(
        "Invalid patient ID format. Expected format: {}",
        health_validation::PATIENT_ID_TEMPLATE
    )
}

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Health(#[from] HealthError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Health(HealthError::InvalidPatientId(_))
            | ApiError::Health(HealthError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            ApiError::Health(HealthError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Health(HealthError::Store(_)) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Health(HealthError::InvalidPatientId(_)) => invalid_id_message(),
            ApiError::Health(HealthError::ValidationError(msg)) => msg.clone(),
            ApiError::Health(HealthError::NotFound(_)) => NOT_FOUND_MESSAGE.to_string(),
            ApiError::Health(HealthError::Store(_)) | ApiError::Internal(_) => {
                // Detail goes to the log only
                tracing::error!(error = %self, "request failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
