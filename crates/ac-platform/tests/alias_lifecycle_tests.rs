//! Alias Lifecycle Integration Tests
//!
//! Exercises the alias core end to end against the in-memory store.

use std::sync::Arc;

use ac_platform::{AliasService, AliasStore, InMemoryAliasStore, PlatformError};

fn service_with_store() -> (AliasService, Arc<InMemoryAliasStore>) {
    let store = Arc::new(InMemoryAliasStore::new());
    (AliasService::new(store.clone()), store)
}

mod lifecycle_tests {
    use super::*;

    // The full issue -> status -> foreign revoke -> owner revoke -> repeat
    // revoke walk-through, including the uniform no-op outcomes.
    #[tokio::test]
    async fn test_full_alias_walkthrough() {
        let (service, _) = service_with_store();

        let issued = service.issue("U1", "demo").await.unwrap();
        assert_eq!(issued.purpose, "demo");
        assert!(!issued.transport_image.is_empty());

        let status = service.status(&issued.alias).await.unwrap().unwrap();
        assert_eq!(status.alias, issued.alias);
        assert_eq!(status.purpose, "demo");
        assert!(status.active);

        // A different principal cannot revoke, and the alias stays live.
        assert_eq!(service.revoke("U2", &issued.alias).await.unwrap(), 0);
        assert!(service.status(&issued.alias).await.unwrap().unwrap().active);

        // The owner can, exactly once.
        assert_eq!(service.revoke("U1", &issued.alias).await.unwrap(), 1);
        assert!(!service.status(&issued.alias).await.unwrap().unwrap().active);
        assert_eq!(service.revoke("U1", &issued.alias).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_revoked_alias_record_is_retained() {
        let (service, store) = service_with_store();

        let issued = service.issue("U1", "demo").await.unwrap();
        service.revoke("U1", &issued.alias).await.unwrap();

        // Revocation deactivates, it never deletes.
        let record = store.find_by_alias(&issued.alias).await.unwrap().unwrap();
        assert!(!record.active);
        assert!(record.revoked_at.is_some());
        assert_eq!(record.purpose, "demo");
    }

    #[tokio::test]
    async fn test_unknown_alias_status_is_absent() {
        let (service, _) = service_with_store();
        assert!(service.status("no-such-alias").await.unwrap().is_none());
    }
}

mod uniqueness_tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_issued_aliases_never_collide() {
        let (service, store) = service_with_store();

        let mut seen = HashSet::new();
        for i in 0..50 {
            let issued = service.issue("U1", &format!("purpose-{}", i)).await.unwrap();
            assert!(seen.insert(issued.alias), "alias issued twice");
        }
        assert_eq!(store.len(), 50);
    }

    #[tokio::test]
    async fn test_each_alias_resolves_to_its_own_record() {
        let (service, store) = service_with_store();

        let first = service.issue("U1", "first").await.unwrap();
        let second = service.issue("U1", "second").await.unwrap();

        let record = store.find_by_alias(&first.alias).await.unwrap().unwrap();
        assert_eq!(record.purpose, "first");
        let record = store.find_by_alias(&second.alias).await.unwrap().unwrap();
        assert_eq!(record.purpose, "second");
    }
}

mod validation_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_purpose_creates_no_record() {
        let (service, store) = service_with_store();

        let err = service.issue("U1", "").await.unwrap_err();
        assert!(matches!(err, PlatformError::Validation { .. }));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_purpose_is_trimmed() {
        let (service, _) = service_with_store();

        let issued = service.issue("U1", "  padded  ").await.unwrap();
        assert_eq!(issued.purpose, "padded");
    }
}

mod concurrency_tests {
    use super::*;

    #[tokio::test]
    async fn test_concurrent_issues_all_succeed_distinctly() {
        let store = Arc::new(InMemoryAliasStore::new());
        let service = Arc::new(AliasService::new(store.clone()));

        let mut handles = Vec::new();
        for i in 0..16 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.issue("U1", &format!("p{}", i)).await.unwrap().alias
            }));
        }

        let mut aliases = std::collections::HashSet::new();
        for handle in handles {
            assert!(aliases.insert(handle.await.unwrap()));
        }
        assert_eq!(store.len(), 16);
    }

    #[tokio::test]
    async fn test_concurrent_owner_revokes_single_success() {
        let store = Arc::new(InMemoryAliasStore::new());
        let service = Arc::new(AliasService::new(store.clone()));
        let issued = service.issue("U1", "demo").await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let service = service.clone();
            let alias = issued.alias.clone();
            handles.push(tokio::spawn(async move {
                service.revoke("U1", &alias).await.unwrap()
            }));
        }

        let mut total = 0;
        for handle in handles {
            total += handle.await.unwrap();
        }
        assert_eq!(total, 1);
    }
}
