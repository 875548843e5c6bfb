//! Upload policy behavior against the mock storage service.

use atelier_storage::mock::MockStorageService;
use atelier_storage::{store_upload, FileUpload, MAX_UPLOAD_BYTES};

fn file(filename: &str, content_type: &str, len: usize) -> FileUpload {
    FileUpload {
        filename: filename.to_string(),
        content_type: content_type.to_string(),
        bytes: vec![0u8; len],
    }
}

#[tokio::test]
async fn image_upload_returns_public_url() {
    let mock = MockStorageService::new();
    let stored = store_upload(&mock, file("site mockup.png", "image/png", 2048))
        .await
        .expect("image accepted");

    assert!(stored.url.contains(&stored.key));
    assert!(stored.key.ends_with("-site_mockup.png"));
    assert_eq!(mock.upload_count(), 1);
}

#[tokio::test]
async fn video_upload_accepted() {
    let mock = MockStorageService::new();
    assert!(store_upload(&mock, file("demo.mp4", "video/mp4", 4096))
        .await
        .is_ok());
}

#[tokio::test]
async fn disallowed_content_type_rejected_before_storage() {
    let mock = MockStorageService::new();
    let result = store_upload(&mock, file("resume.pdf", "application/pdf", 1024)).await;

    assert!(result.is_err());
    assert_eq!(mock.upload_count(), 0);
}

#[tokio::test]
async fn oversized_upload_rejected() {
    let mock = MockStorageService::new();
    let result = store_upload(
        &mock,
        file("huge.png", "image/png", MAX_UPLOAD_BYTES + 1),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(mock.upload_count(), 0);
}

#[tokio::test]
async fn keys_are_unique_across_identical_files() {
    let mock = MockStorageService::new();
    let a = store_upload(&mock, file("cover.png", "image/png", 10))
        .await
        .unwrap();
    let b = store_upload(&mock, file("cover.png", "image/png", 10))
        .await
        .unwrap();
    assert_ne!(a.key, b.key);
}
