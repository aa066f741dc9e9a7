//! Storage interface and the in-memory backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::seed::seed_patients;
use crate::types::{NewPatient, NewUser, Patient, User};

/// Storage backend for patients and user credentials.
///
/// Implementations store whatever key they are given; identifier format is
/// enforced by [`crate::PatientDirectory`], not here.
#[async_trait]
pub trait HealthStore: Send + Sync {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;
    async fn get_patient_by_id(&self, patient_id: &str) -> Result<Option<Patient>, StoreError>;
    /// Insert or replace the record keyed by `patient.patient_id`
    async fn create_patient(&self, patient: NewPatient) -> Result<Patient, StoreError>;
}

/// Process-local store. Each process holds its own independent copy.
#[derive(Debug, Default)]
pub struct MemStorage {
    users: RwLock<HashMap<String, User>>,
    patients: RwLock<HashMap<String, Patient>>,
}

impl MemStorage {
    /// Store pre-loaded with [`seed_patients`]
    pub fn new() -> Self {
        Self::with_patients(seed_patients())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_patients(patients: impl IntoIterator<Item = Patient>) -> Self {
        let patients = patients
            .into_iter()
            .map(|p| (p.patient_id.clone(), p))
            .collect();
        Self {
            users: RwLock::new(HashMap::new()),
            patients: RwLock::new(patients),
        }
    }

    pub async fn patient_count(&self) -> usize {
        self.patients.read().await.len()
    }
}

#[async_trait]
impl HealthStore for MemStorage {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.username == user.username) {
            return Err(StoreError::DuplicateUsername(user.username));
        }

        let created = User {
            id: Uuid::new_v4().to_string(),
            username: user.username,
            password: user.password,
        };
        users.insert(created.id.clone(), created.clone());
        tracing::debug!(user_id = %created.id, "created user");
        Ok(created)
    }

    async fn get_patient_by_id(&self, patient_id: &str) -> Result<Option<Patient>, StoreError> {
        Ok(self.patients.read().await.get(patient_id).cloned())
    }

    async fn create_patient(&self, patient: NewPatient) -> Result<Patient, StoreError> {
        let patient = Patient::from(patient);
        let replaced = self
            .patients
            .write()
            .await
            .insert(patient.patient_id.clone(), patient.clone());
        tracing::debug!(
            patient_id = %patient.patient_id,
            replaced = replaced.is_some(),
            "stored patient"
        );
        Ok(patient)
    }
}
