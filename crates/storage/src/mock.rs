//! Mock storage service implementation
//!
//! Captures uploads in memory and hands back deterministic-looking public
//! URLs so handlers and tests never touch a real bucket.

use std::sync::{Arc, Mutex};

use crate::{FileUpload, ObjectStorage, StorageError, StoredObject};

/// An upload captured by the mock service
#[derive(Debug, Clone)]
pub struct CapturedUpload {
    pub key: String,
    pub filename: String,
    pub content_type: String,
    pub size_bytes: usize,
}

/// Mock storage service for testing
#[derive(Debug, Clone, Default)]
pub struct MockStorageService {
    uploads: Arc<Mutex<Vec<CapturedUpload>>>,
    fail_puts: bool,
}

impl MockStorageService {
    /// Create a new mock storage service
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose puts always fail
    pub fn new_failing() -> Self {
        Self {
            fail_puts: true,
            ..Self::default()
        }
    }

    /// All uploads captured so far
    pub fn captured_uploads(&self) -> Vec<CapturedUpload> {
        self.uploads.lock().unwrap().clone()
    }

    /// Number of captured uploads
    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    /// Clear captured uploads
    pub fn clear(&self) {
        self.uploads.lock().unwrap().clear();
    }
}

#[async_trait::async_trait]
impl ObjectStorage for MockStorageService {
    async fn put_object(&self, upload: FileUpload) -> Result<StoredObject, StorageError> {
        if self.fail_puts {
            return Err(StorageError::AwsS3("Simulated upload failure".to_string()));
        }

        let key = upload.object_key();
        let url = format!("https://mock-storage.local/{}", key);

        self.uploads.lock().unwrap().push(CapturedUpload {
            key: key.clone(),
            filename: upload.filename.clone(),
            content_type: upload.content_type.clone(),
            size_bytes: upload.bytes.len(),
        });

        tracing::info!(key = %key, "Mock storage captured upload");

        Ok(StoredObject { key, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store_upload;

    fn upload() -> FileUpload {
        FileUpload {
            filename: "hero image.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    #[tokio::test]
    async fn test_mock_captures_upload() {
        let mock = MockStorageService::new();
        let stored = store_upload(&mock, upload()).await.unwrap();

        assert!(stored.url.starts_with("https://mock-storage.local/"));
        assert!(stored.key.ends_with("-hero_image.png"));
        assert_eq!(mock.upload_count(), 1);

        let captured = &mock.captured_uploads()[0];
        assert_eq!(captured.content_type, "image/png");
        assert_eq!(captured.size_bytes, 3);
    }

    #[tokio::test]
    async fn test_store_upload_enforces_policy() {
        let mock = MockStorageService::new();
        let bad = FileUpload {
            filename: "notes.txt".to_string(),
            content_type: "text/plain".to_string(),
            bytes: vec![1],
        };
        assert!(store_upload(&mock, bad).await.is_err());
        assert_eq!(mock.upload_count(), 0);
    }

    #[tokio::test]
    async fn test_failing_mock_errors() {
        let mock = MockStorageService::new_failing();
        assert!(store_upload(&mock, upload()).await.is_err());
    }
}
