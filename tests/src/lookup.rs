//! Directory Lookup Tests
//!
//! Lookup outcomes for seeded, missing, malformed and re-registered IDs.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use health_records::{HealthError, HealthStore, MemStorage, PatientDirectory, PatientStatus};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seeded_values_exact() {
        let directory = seeded_directory();
        for expected in SEEDED {
            let patient = directory.lookup(expected.patient_id).await.unwrap();
            let actual = serde_json::to_value(&patient).unwrap();
            assert_eq!(actual, serde_json::to_value(&expected).unwrap());
        }
    }

    #[tokio::test]
    async fn test_documented_examples() {
        let directory = seeded_directory();

        let sarah = directory.lookup("PT-IND-12345678").await.unwrap();
        assert_eq!(sarah.name, "Sarah Johnson");
        assert_eq!(sarah.status, PatientStatus::Active);

        assert!(matches!(
            directory.lookup("PAT-2024-001").await,
            Err(HealthError::InvalidPatientId(_))
        ));
        assert!(matches!(
            directory.lookup("PT-IND-99999999").await,
            Err(HealthError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_register_makes_record_visible() {
        let directory = seeded_directory();
        assert!(matches!(
            directory.lookup("PT-IND-20240001").await,
            Err(HealthError::NotFound(_))
        ));

        directory
            .register(new_patient("PT-IND-20240001", "Ravi Patel"))
            .await
            .unwrap();

        let ravi = directory.lookup("PT-IND-20240001").await.unwrap();
        assert_eq!(ravi.name, "Ravi Patel");
    }

    #[tokio::test]
    async fn test_directories_do_not_share_state() {
        let a = seeded_directory();
        let b = seeded_directory();

        a.register(new_patient("PT-IND-30000003", "Only In A")).await.unwrap();

        assert!(a.lookup("PT-IND-30000003").await.is_ok());
        assert!(matches!(
            b.lookup("PT-IND-30000003").await,
            Err(HealthError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_shared_store_sees_raw_inserts() {
        let store = Arc::new(MemStorage::empty());
        let directory = PatientDirectory::new(store.clone());

        store
            .create_patient(new_patient("PT-IND-40000004", "Raw Insert"))
            .await
            .unwrap();
        assert_eq!(
            directory.lookup("PT-IND-40000004").await.unwrap().name,
            "Raw Insert"
        );
    }
}
