//! HTTP routes
//!
//! - `GET /api/patients/:patient_id` - patient lookup
//! - `GET /health` - liveness

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use health_records::{HealthError, Patient};

use crate::error::ApiError;
use crate::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/patients/:patient_id", get(get_patient))
        .route("/health", get(health))
        .with_state(state)
}

/// GET /api/patients/:patient_id
///
/// 200 with the record, 400 for a malformed ID, 404 when absent.
/// A segment that does not decode to UTF-8 is a malformed ID too.
async fn get_patient(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Patient>, ApiError> {
    let patient_id = match path {
        Ok(Path(patient_id)) => patient_id,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "undecodable patient id");
            return Err(HealthError::InvalidPatientId(rejection.body_text()).into());
        }
    };

    match state.directory.lookup(&patient_id).await {
        Ok(patient) => {
            tracing::debug!(%patient_id, "patient found");
            Ok(Json(patient))
        }
        Err(err) => {
            tracing::debug!(%patient_id, error = %err, "patient lookup rejected");
            Err(err.into())
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
