use uuid::Uuid;

use paddock_domain::role::AppRole;
use paddock_portal::error::PortalError;
use paddock_portal::usecase::profile::EnsureProfileUseCase;

use crate::helpers::{MockProfileRepo, WriteSpec, test_identity, test_profile};

#[tokio::test]
async fn should_return_existing_profile_without_writing() {
    let repo = MockProfileRepo::with_row(test_profile(AppRole::SuperAdmin, None));
    let usecase = EnsureProfileUseCase { repo: &repo };

    let profile = usecase.execute(&test_identity()).await.unwrap().unwrap();

    assert_eq!(profile.role, AppRole::SuperAdmin);
    assert_eq!(repo.calls(), vec!["find"]);
}

#[tokio::test]
async fn should_create_profile_via_privileged_upsert_first() {
    let mut repo = MockProfileRepo::empty();
    repo.privileged_available = true;
    let usecase = EnsureProfileUseCase { repo: &repo };

    let identity = test_identity();
    let profile = usecase.execute(&identity).await.unwrap().unwrap();

    assert_eq!(profile.role, AppRole::DealerManager);
    assert_eq!(
        profile.dealer_id,
        Some(Uuid::parse_str("00000000-0000-0000-0000-0000000000aa").unwrap())
    );
    // No plain insert once the privileged tier succeeded.
    assert_eq!(repo.calls(), vec!["find", "upsert_privileged", "find"]);
}

#[tokio::test]
async fn should_fall_back_to_plain_insert_without_privileged_tier() {
    let repo = MockProfileRepo::empty();
    let usecase = EnsureProfileUseCase { repo: &repo };

    let profile = usecase.execute(&test_identity()).await.unwrap().unwrap();

    assert_eq!(profile.role, AppRole::DealerManager);
    assert_eq!(
        repo.calls(),
        vec![
            "find",
            "upsert_privileged",
            "insert role=DEALER_MANAGER dealer=true",
            "find",
        ]
    );
}

#[tokio::test]
async fn should_fall_back_to_plain_insert_when_privileged_upsert_fails() {
    let mut repo = MockProfileRepo::empty();
    repo.privileged_available = true;
    repo.privileged_outcome = WriteSpec::Failure;
    let usecase = EnsureProfileUseCase { repo: &repo };

    let profile = usecase.execute(&test_identity()).await.unwrap();

    assert!(profile.is_some());
    assert!(
        repo.calls()
            .iter()
            .any(|call| call.starts_with("insert role=DEALER_MANAGER"))
    );
}

#[tokio::test]
async fn should_retry_with_reduced_payload_on_permission_error() {
    let repo = MockProfileRepo {
        insert_outcomes: std::sync::Mutex::new(vec![
            WriteSpec::PermissionDenied,
            WriteSpec::Success,
        ]),
        ..MockProfileRepo::empty()
    };
    let usecase = EnsureProfileUseCase { repo: &repo };

    let profile = usecase.execute(&test_identity()).await.unwrap().unwrap();

    // The second attempt dropped the dealer and forced the bottom role.
    assert_eq!(profile.role, AppRole::DealerStaff);
    assert_eq!(profile.dealer_id, None);
    assert_eq!(
        repo.calls(),
        vec![
            "find",
            "upsert_privileged",
            "insert role=DEALER_MANAGER dealer=true",
            "insert role=DEALER_STAFF dealer=false",
            "find",
        ]
    );
}

#[tokio::test]
async fn should_treat_duplicate_key_as_winning_race() {
    let winner = test_profile(AppRole::DealerStaff, None);
    let repo = MockProfileRepo {
        insert_outcomes: std::sync::Mutex::new(vec![WriteSpec::Duplicate]),
        race_winner: Some(winner.clone()),
        ..MockProfileRepo::empty()
    };
    let usecase = EnsureProfileUseCase { repo: &repo };

    let profile = usecase.execute(&test_identity()).await.unwrap().unwrap();

    // The loser observes the winner's row, not its own payload.
    assert_eq!(profile, winner);
}

#[tokio::test]
async fn should_tolerate_missing_profiles_table() {
    let repo = MockProfileRepo {
        insert_outcomes: std::sync::Mutex::new(vec![WriteSpec::TableMissing]),
        ..MockProfileRepo::empty()
    };
    let usecase = EnsureProfileUseCase { repo: &repo };

    // Nothing persisted and nothing to re-read: the gate maps this to a
    // profile-missing redirect rather than an error.
    let profile = usecase.execute(&test_identity()).await.unwrap();
    assert!(profile.is_none());
}

#[tokio::test]
async fn should_propagate_unclassified_insert_failures() {
    let repo = MockProfileRepo {
        insert_outcomes: std::sync::Mutex::new(vec![WriteSpec::Failure]),
        ..MockProfileRepo::empty()
    };
    let usecase = EnsureProfileUseCase { repo: &repo };

    let result = usecase.execute(&test_identity()).await;
    assert!(matches!(result, Err(PortalError::Internal(_))));
}

#[tokio::test]
async fn should_error_when_even_reduced_payload_is_rejected() {
    let repo = MockProfileRepo {
        insert_outcomes: std::sync::Mutex::new(vec![
            WriteSpec::PermissionDenied,
            WriteSpec::PermissionDenied,
        ]),
        ..MockProfileRepo::empty()
    };
    let usecase = EnsureProfileUseCase { repo: &repo };

    let result = usecase.execute(&test_identity()).await;
    assert!(matches!(result, Err(PortalError::Internal(_))));
}
