//! Health Records Store
//!
//! Data model and storage for the health records service:
//! - Patient records and user credentials
//! - The `HealthStore` trait with an in-memory backend
//! - `PatientDirectory`, the validated lookup/registration service
//! - The demo seed dataset

pub mod directory;
pub mod error;
pub mod seed;
pub mod store;
pub mod types;

pub use directory::PatientDirectory;
pub use error::{HealthError, StoreError};
pub use seed::seed_patients;
pub use store::{HealthStore, MemStorage};
pub use types::{NewPatient, NewUser, Patient, PatientStatus, User};
