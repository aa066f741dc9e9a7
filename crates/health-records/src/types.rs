//! Record types held by the store.

use serde::{Deserialize, Serialize};

/// Patient profile as served by the lookup endpoint
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Primary key, `PT-IND-` followed by 8 digits
    pub patient_id: String,
    /// Display name
    pub name: String,
    /// Date of birth (YYYY-MM-DD format)
    pub date_of_birth: String,
    pub phone: String,
    pub email: String,
    pub status: PatientStatus,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatientStatus::Active => write!(f, "active"),
            PatientStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// Insert shape for a patient; a missing status means active
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub patient_id: String,
    pub name: String,
    pub date_of_birth: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub status: Option<PatientStatus>,
}

impl From<NewPatient> for Patient {
    fn from(new: NewPatient) -> Self {
        Patient {
            patient_id: new.patient_id,
            name: new.name,
            date_of_birth: new.date_of_birth,
            phone: new.phone,
            email: new.email,
            status: new.status.unwrap_or_default(),
        }
    }
}

/// Login credentials for a dashboard user.
///
/// The password is kept as submitted and is never serialized outward.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
