//! Patient Directory
//!
//! Composes identifier validation with a [`HealthStore`] to answer
//! "does this patient exist, and if so what are its fields".
//!
//! The directory holds its store behind an `Arc` handed in by the caller,
//! so tests and the server each build their own instance.

use std::sync::Arc;

use health_validation::{
    validate_date_of_birth, validate_email, validate_patient_id, validate_required,
};

use crate::error::HealthError;
use crate::store::HealthStore;
use crate::types::{NewPatient, Patient};

#[derive(Clone)]
pub struct PatientDirectory {
    store: Arc<dyn HealthStore>,
}

impl PatientDirectory {
    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self { store }
    }

    /// Look up a patient by identifier.
    ///
    /// Malformed identifiers are rejected before the store is consulted, so
    /// a record stored under a malformed key is never returned.
    pub async fn lookup(&self, patient_id: &str) -> Result<Patient, HealthError> {
        if !health_validation::is_valid_patient_id(patient_id) {
            return Err(HealthError::InvalidPatientId(patient_id.to_string()));
        }

        self.store
            .get_patient_by_id(patient_id)
            .await?
            .ok_or_else(|| HealthError::NotFound(patient_id.to_string()))
    }

    /// Validate and insert (or replace) a patient record
    pub async fn register(&self, patient: NewPatient) -> Result<Patient, HealthError> {
        let id_check = validate_patient_id(&patient.patient_id);
        if !id_check.is_valid() {
            return Err(HealthError::InvalidPatientId(patient.patient_id));
        }

        let mut result = validate_required(&patient.name, "name");
        result.merge(validate_date_of_birth(&patient.date_of_birth));
        result.merge(validate_required(&patient.phone, "phone"));
        result.merge(validate_email(&patient.email));
        result.into_result().map_err(HealthError::ValidationError)?;

        let stored = self.store.create_patient(patient).await?;
        tracing::info!(patient_id = %stored.patient_id, "registered patient");
        Ok(stored)
    }
}
