//! Demo dataset loaded into a fresh [`crate::MemStorage`].

use crate::types::{Patient, PatientStatus};

fn patient(id: &str, name: &str, dob: &str, phone: &str, email: &str) -> Patient {
    Patient {
        patient_id: id.to_string(),
        name: name.to_string(),
        date_of_birth: dob.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        status: PatientStatus::Active,
    }
}

/// The three example patients every seeded directory starts with
pub fn seed_patients() -> Vec<Patient> {
    vec![
        patient(
            "PT-IND-12345678",
            "Sarah Johnson",
            "1985-03-15",
            "+1 (555) 123-4567",
            "sarah.johnson@email.com",
        ),
        patient(
            "PT-IND-87654321",
            "Michael Chen",
            "1990-07-22",
            "+1 (555) 987-6543",
            "michael.chen@email.com",
        ),
        patient(
            "PT-IND-11223344",
            "Emily Rodriguez",
            "1978-12-05",
            "+1 (555) 222-3344",
            "emily.rodriguez@email.com",
        ),
    ]
}
