//! Atelier Object Storage Service
//!
//! Accepts uploaded file buffers and returns public URLs from a cloud
//! object store:
//! - AWS S3 integration for production
//! - Mock storage service for testing and development
//!
//! Upload policy (content-type allow-list, size cap, key sanitization)
//! lives here so every backend enforces the same rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod mock;
pub mod s3;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage configuration error: {0}")]
    Configuration(String),

    #[error("Upload validation error: {0}")]
    Validation(String),

    #[error("AWS S3 error: {0}")]
    AwsS3(String),
}

/// Maximum accepted file size (50 MB)
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// A file buffer received from a multipart upload
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Validate against the upload policy: images and videos only,
    /// non-empty, at most [`MAX_UPLOAD_BYTES`].
    pub fn validate(&self) -> Result<(), StorageError> {
        if !self.content_type.starts_with("image/") && !self.content_type.starts_with("video/") {
            return Err(StorageError::Validation(format!(
                "Content type '{}' not allowed; only images and videos are accepted",
                self.content_type
            )));
        }

        if self.bytes.is_empty() {
            return Err(StorageError::Validation("Empty file".to_string()));
        }

        if self.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(StorageError::Validation(format!(
                "File size exceeds maximum of {} bytes",
                MAX_UPLOAD_BYTES
            )));
        }

        Ok(())
    }

    /// Object key for this upload: `{uuid}-{sanitized filename}`.
    ///
    /// Spaces become underscores so the resulting public URL needs no
    /// escaping.
    pub fn object_key(&self) -> String {
        format!("{}-{}", Uuid::new_v4(), self.filename.replace(' ', "_"))
    }
}

/// A stored object with its public URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredObject {
    pub key: String,
    pub url: String,
}

/// Storage service configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage provider (s3, mock)
    pub provider: String,
    /// Bucket receiving uploads
    pub bucket: String,
    /// AWS region for S3
    pub aws_region: Option<String>,
    /// AWS endpoint URL (for LocalStack)
    pub aws_endpoint_url: Option<String>,
}

impl StorageConfig {
    /// Create storage config from environment variables
    pub fn from_env() -> Result<Self, StorageError> {
        dotenvy::dotenv().ok();

        let provider = std::env::var("STORAGE_PROVIDER").unwrap_or_else(|_| "mock".to_string());

        let bucket = std::env::var("S3_BUCKET_UPLOADS").unwrap_or_default();
        if provider == "s3" && bucket.is_empty() {
            return Err(StorageError::Configuration(
                "S3_BUCKET_UPLOADS is required for the s3 provider".to_string(),
            ));
        }

        Ok(Self {
            provider,
            bucket,
            aws_region: std::env::var("AWS_REGION").ok(),
            aws_endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
        })
    }
}

/// Object storage trait for different backends
#[async_trait::async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store a validated upload and return its public URL.
    ///
    /// Implementations may assume `upload.validate()` has passed; callers
    /// go through [`store_upload`] which enforces it.
    async fn put_object(&self, upload: FileUpload) -> Result<StoredObject, StorageError>;
}

/// Validate an upload and store it.
pub async fn store_upload(
    storage: &dyn ObjectStorage,
    upload: FileUpload,
) -> Result<StoredObject, StorageError> {
    upload.validate()?;
    storage.put_object(upload).await
}

/// Factory for creating ObjectStorage implementations
pub struct StorageServiceFactory;

impl StorageServiceFactory {
    pub async fn create(config: StorageConfig) -> Result<Box<dyn ObjectStorage>, StorageError> {
        match config.provider.as_str() {
            "s3" | "aws-s3" => {
                tracing::info!("Creating AWS S3 storage service");
                let service = s3::S3StorageService::new(config).await?;
                Ok(Box::new(service))
            }
            "mock" => {
                tracing::info!("Creating mock storage service");
                Ok(Box::new(mock::MockStorageService::new()))
            }
            provider => Err(StorageError::Configuration(format!(
                "Unknown storage provider: {}. Supported providers: s3, mock",
                provider
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(content_type: &str, len: usize) -> FileUpload {
        FileUpload {
            filename: "shot 01.png".to_string(),
            content_type: content_type.to_string(),
            bytes: vec![0u8; len],
        }
    }

    #[test]
    fn test_validate_accepts_images_and_videos() {
        assert!(upload("image/png", 1024).validate().is_ok());
        assert!(upload("image/jpeg", 1024).validate().is_ok());
        assert!(upload("video/mp4", 1024).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_other_content_types() {
        assert!(upload("text/plain", 1024).validate().is_err());
        assert!(upload("application/pdf", 1024).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_file() {
        assert!(upload("image/png", 0).validate().is_err());
    }

    #[test]
    fn test_validate_size_boundary() {
        assert!(upload("image/png", MAX_UPLOAD_BYTES).validate().is_ok());
        assert!(upload("image/png", MAX_UPLOAD_BYTES + 1).validate().is_err());
    }

    #[test]
    fn test_object_key_sanitizes_spaces() {
        let key = upload("image/png", 10).object_key();
        assert!(key.ends_with("-shot_01.png"));
        assert!(!key.contains(' '));
        // Leading UUID makes keys unique per upload
        let other = upload("image/png", 10).object_key();
        assert_ne!(key, other);
    }
}
