//! Credential Store Tests
//!
//! Tests for user creation, lookup by id and username, and uniqueness.

#[cfg(test)]
mod tests {
    use health_records::{HealthStore, MemStorage, NewUser, StoreError};

    fn creds(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "changeme".to_string(),
        }
    }

    #[tokio::test]
    async fn test_seeded_store_has_no_users() {
        let store = MemStorage::new();
        assert!(store.get_user_by_username("doctor").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_one_account_per_role() {
        let store = MemStorage::empty();
        let mut ids = Vec::new();
        for role in ["patient", "doctor", "pharmacy"] {
            let user = store.create_user(creds(role)).await.unwrap();
            ids.push(user.id.clone());
            assert_eq!(store.get_user(&user.id).await.unwrap().unwrap().username, role);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn test_username_is_case_sensitive() {
        let store = MemStorage::empty();
        store.create_user(creds("Doctor")).await.unwrap();
        assert!(store.create_user(creds("doctor")).await.is_ok());
        assert_eq!(
            store.create_user(creds("Doctor")).await.unwrap_err(),
            StoreError::DuplicateUsername("Doctor".to_string())
        );
    }

    #[tokio::test]
    async fn test_serialized_user_hides_password() {
        let store = MemStorage::empty();
        let user = store.create_user(creds("pharmacy")).await.unwrap();
        assert_eq!(user.password, "changeme");

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("changeme"));
        assert!(json.contains("pharmacy"));
    }
}
