//! AWS S3 storage service implementation
//!
//! Uploads objects with public-read intent and returns the canonical
//! public URL, with support for the LocalStack testing environment.

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::config::SharedCredentialsProvider;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;

use crate::{FileUpload, ObjectStorage, StorageConfig, StorageError, StoredObject};

/// AWS S3 storage service implementation
pub struct S3StorageService {
    client: S3Client,
    bucket: String,
    region: String,
    endpoint_url: Option<String>,
}

impl S3StorageService {
    /// Create a new S3 storage service
    pub async fn new(config: StorageConfig) -> Result<Self, StorageError> {
        if config.bucket.is_empty() {
            return Err(StorageError::Configuration(
                "S3 bucket name is required".to_string(),
            ));
        }

        let region = config
            .aws_region
            .clone()
            .unwrap_or_else(|| "us-east-1".to_string());

        let aws_config = match config.aws_endpoint_url.as_ref() {
            Some(endpoint_url) => {
                tracing::info!("Using custom AWS endpoint: {}", endpoint_url);

                // For LocalStack, use dummy credentials
                let credentials = Credentials::new(
                    "test-access-key",
                    "test-secret-key",
                    None,
                    None,
                    "localstack-storage-provider",
                );

                aws_config::defaults(BehaviorVersion::latest())
                    .region(Region::new(region.clone()))
                    .endpoint_url(endpoint_url)
                    .credentials_provider(SharedCredentialsProvider::new(credentials))
                    .load()
                    .await
            }
            None => {
                aws_config::defaults(BehaviorVersion::latest())
                    .region(Region::new(region.clone()))
                    .load()
                    .await
            }
        };

        let client = S3Client::new(&aws_config);

        Ok(Self {
            client,
            bucket: config.bucket,
            region,
            endpoint_url: config.aws_endpoint_url,
        })
    }

    /// Public URL for a stored object key
    fn public_url(&self, key: &str) -> String {
        match &self.endpoint_url {
            Some(endpoint) => format!("{}/{}/{}", endpoint, self.bucket, key),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, key
            ),
        }
    }
}

#[async_trait::async_trait]
impl ObjectStorage for S3StorageService {
    async fn put_object(&self, upload: FileUpload) -> Result<StoredObject, StorageError> {
        let key = upload.object_key();

        tracing::info!(bucket = %self.bucket, key = %key, "Uploading object to S3");

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(&upload.content_type)
            .body(ByteStream::from(upload.bytes))
            .send()
            .await
            .map_err(|e| StorageError::AwsS3(format!("Failed to upload object: {}", e)))?;

        let url = self.public_url(&key);
        Ok(StoredObject { key, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_s3_service_requires_bucket() {
        let config = StorageConfig {
            provider: "s3".to_string(),
            bucket: String::new(),
            aws_region: None,
            aws_endpoint_url: None,
        };
        assert!(S3StorageService::new(config).await.is_err());
    }

    #[tokio::test]
    async fn test_public_url_shapes() {
        let service = S3StorageService::new(StorageConfig {
            provider: "s3".to_string(),
            bucket: "uploads".to_string(),
            aws_region: Some("eu-west-1".to_string()),
            aws_endpoint_url: None,
        })
        .await
        .unwrap();
        assert_eq!(
            service.public_url("abc-file.png"),
            "https://uploads.s3.eu-west-1.amazonaws.com/abc-file.png"
        );

        let local = S3StorageService::new(StorageConfig {
            provider: "s3".to_string(),
            bucket: "uploads".to_string(),
            aws_region: None,
            aws_endpoint_url: Some("http://localhost:4566".to_string()),
        })
        .await
        .unwrap();
        assert_eq!(
            local.public_url("abc-file.png"),
            "http://localhost:4566/uploads/abc-file.png"
        );
    }
}
