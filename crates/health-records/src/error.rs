use thiserror::Error;

/// Failures raised by a [`crate::HealthStore`] backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Standard error types for directory operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HealthError {
    #[error("Invalid patient ID: {0}")]
    InvalidPatientId(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
