use paddock_portal::error::PortalError;
use paddock_portal::usecase::upload::{
    BulkVisualDefaults, BulkVisualUploadUseCase, MAX_UPLOAD_SIZE, PROJECT_IMAGES_BUCKET,
    UploadImageUseCase, VISUALS_BUCKET,
};

use crate::helpers::{MockStorage, MockVisualRepo, uploaded_file};

#[tokio::test]
async fn should_upload_image_under_a_generated_path() {
    let storage = MockStorage::default();
    let usecase = UploadImageUseCase { storage: &storage };

    let url = usecase
        .execute(
            PROJECT_IMAGES_BUCKET,
            "covers",
            &uploaded_file("cover.PNG", Some("image/png"), 1024),
        )
        .await
        .unwrap()
        .unwrap();

    let uploads = storage.uploads();
    assert_eq!(uploads.len(), 1);
    let (bucket, path, content_type, len) = &uploads[0];
    assert_eq!(bucket, PROJECT_IMAGES_BUCKET);
    assert!(path.starts_with("covers/"));
    assert!(path.ends_with(".png"));
    assert_eq!(content_type, "image/png");
    assert_eq!(*len, 1024);
    assert_eq!(url, format!("https://cdn.test/{bucket}/{path}"));
}

#[tokio::test]
async fn should_skip_zero_byte_files() {
    let storage = MockStorage::default();
    let usecase = UploadImageUseCase { storage: &storage };

    let url = usecase
        .execute(VISUALS_BUCKET, "display", &uploaded_file("empty.jpg", None, 0))
        .await
        .unwrap();

    assert!(url.is_none());
    assert!(storage.uploads().is_empty());
}

#[tokio::test]
async fn should_reject_oversized_files_before_any_upload() {
    let storage = MockStorage::default();
    let usecase = UploadImageUseCase { storage: &storage };

    let result = usecase
        .execute(
            VISUALS_BUCKET,
            "display",
            &uploaded_file("huge.jpg", Some("image/jpeg"), MAX_UPLOAD_SIZE + 1),
        )
        .await;

    assert!(matches!(result, Err(PortalError::UploadTooLarge)));
    assert!(storage.uploads().is_empty());
}

#[tokio::test]
async fn should_reject_non_image_files() {
    let storage = MockStorage::default();
    let usecase = UploadImageUseCase { storage: &storage };

    let result = usecase
        .execute(
            VISUALS_BUCKET,
            "display",
            &uploaded_file("notes.pdf", Some("application/pdf"), 128),
        )
        .await;

    assert!(matches!(result, Err(PortalError::UnsupportedUpload)));
}

#[tokio::test]
async fn should_surface_storage_failures_with_their_message() {
    let storage = MockStorage {
        fail_with: Some("bucket quota exceeded".to_owned()),
        ..MockStorage::default()
    };
    let usecase = UploadImageUseCase { storage: &storage };

    let result = usecase
        .execute(
            VISUALS_BUCKET,
            "display",
            &uploaded_file("ok.jpg", Some("image/jpeg"), 128),
        )
        .await;

    match result {
        Err(PortalError::UploadFailed(message)) => assert_eq!(message, "bucket quota exceeded"),
        other => panic!("expected UploadFailed, got {other:?}"),
    }
}

// ── Bulk upload ──────────────────────────────────────────────────────────────

fn defaults() -> BulkVisualDefaults {
    BulkVisualDefaults {
        tags: vec!["night".to_owned(), "rain".to_owned()],
        published: true,
        featured: false,
    }
}

#[tokio::test]
async fn should_bulk_create_one_visual_per_file_with_derived_titles() {
    let storage = MockStorage::default();
    let repo = MockVisualRepo::default();
    let usecase = BulkVisualUploadUseCase {
        storage: &storage,
        repo: &repo,
    };

    let created = usecase
        .execute(
            &[
                uploaded_file("gt3_rs-front.jpg", Some("image/jpeg"), 256),
                uploaded_file("paddock-dawn.webp", Some("image/webp"), 256),
            ],
            &defaults(),
        )
        .await
        .unwrap();

    assert_eq!(created, 2);
    let visuals = repo.visuals.lock().unwrap();
    assert_eq!(visuals[0].title, "gt3 rs front");
    assert_eq!(visuals[1].title, "paddock dawn");
    assert_eq!(visuals[0].tags, vec!["night", "rain"]);
    assert!(visuals[0].published);
    // Display upload doubles as the thumbnail in bulk mode.
    assert_eq!(visuals[0].thumbnail_url, Some(visuals[0].image_url.clone()));
}

#[tokio::test]
async fn should_stop_at_first_failing_file_keeping_earlier_rows() {
    let storage = MockStorage::default();
    let repo = MockVisualRepo::default();
    let usecase = BulkVisualUploadUseCase {
        storage: &storage,
        repo: &repo,
    };

    let result = usecase
        .execute(
            &[
                uploaded_file("first.jpg", Some("image/jpeg"), 256),
                uploaded_file("huge.jpg", Some("image/jpeg"), MAX_UPLOAD_SIZE + 1),
                uploaded_file("never.jpg", Some("image/jpeg"), 256),
            ],
            &defaults(),
        )
        .await;

    assert!(matches!(result, Err(PortalError::UploadTooLarge)));
    // Sequential semantics: the row created before the failure remains.
    assert_eq!(repo.visuals.lock().unwrap().len(), 1);
    assert_eq!(storage.uploads().len(), 1);
}

#[tokio::test]
async fn should_skip_empty_files_in_bulk_batches() {
    let storage = MockStorage::default();
    let repo = MockVisualRepo::default();
    let usecase = BulkVisualUploadUseCase {
        storage: &storage,
        repo: &repo,
    };

    let created = usecase
        .execute(
            &[
                uploaded_file("empty.jpg", Some("image/jpeg"), 0),
                uploaded_file("real.jpg", Some("image/jpeg"), 256),
            ],
            &defaults(),
        )
        .await
        .unwrap();

    assert_eq!(created, 1);
}
