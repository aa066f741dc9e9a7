//! Property-Based Tests for Directory Lookup
//!
//! These tests verify the lookup contract over generated identifiers:
//! - Anything outside `^PT-IND-\d{8}$` is rejected as malformed, even if stored
//! - Well-formed identifiers that are not seeded come back not-found
//! - Repeated lookups agree while the directory is unchanged
//!
//! Uses proptest for randomized property testing with shrinking.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use health_records::{HealthError, HealthStore, MemStorage, PatientDirectory};
    use health_validation::is_valid_patient_id;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
    }

    proptest! {
        #[test]
        fn prop_malformed_rejected_even_when_stored(id in "\\PC{0,24}") {
            prop_assume!(!is_valid_patient_id(&id));

            let rt = runtime();
            let result = rt.block_on(async {
                let store = Arc::new(MemStorage::new());
                store.create_patient(new_patient(&id, "Stored Under Bad Key")).await.unwrap();
                PatientDirectory::new(store).lookup(&id).await
            });

            prop_assert_eq!(result, Err(HealthError::InvalidPatientId(id.clone())));
        }

        #[test]
        fn prop_unseeded_well_formed_not_found(id in "PT-IND-[0-9]{8}") {
            prop_assume!(!is_seeded(&id));

            let rt = runtime();
            let result = rt.block_on(seeded_directory().lookup(&id));

            prop_assert_eq!(result, Err(HealthError::NotFound(id.clone())));
        }

        #[test]
        fn prop_lookup_idempotent(id in "PT-IND-[0-9]{8}|\\PC{0,20}") {
            let rt = runtime();
            let directory = seeded_directory();
            let (first, second) = rt.block_on(async {
                (directory.lookup(&id).await, directory.lookup(&id).await)
            });

            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_registered_ids_found(digits in "[0-9]{8}", name in "[A-Za-z]{1,12} [A-Za-z]{1,12}") {
            let id = format!("PT-IND-{}", digits);
            let rt = runtime();
            let directory = seeded_directory();
            let found = rt.block_on(async {
                directory.register(new_patient(&id, &name)).await.unwrap();
                directory.lookup(&id).await
            });

            let patient = found.unwrap();
            prop_assert_eq!(patient.patient_id, id);
            prop_assert_eq!(patient.name, name);
        }
    }
}
