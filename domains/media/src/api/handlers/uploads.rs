//! File upload API handlers
//!
//! Accepts multipart uploads, applies the storage policy, and returns
//! public URLs. Files never touch local disk.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use atelier_auth::AdminUser;
use atelier_common::{Error, Result};
use atelier_storage::{store_upload, FileUpload, StorageError};

use crate::api::middleware::MediaState;

/// Maximum number of files per multi-upload request
pub const MAX_FILES_PER_REQUEST: usize = 10;

/// Response for a single upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Response for a multi-file upload
#[derive(Debug, Serialize)]
pub struct MultiUploadResponse {
    pub urls: Vec<String>,
}

fn map_storage_error(err: StorageError) -> Error {
    match err {
        StorageError::Validation(msg) => Error::Validation(msg),
        StorageError::Configuration(msg) => Error::Internal(msg),
        StorageError::AwsS3(msg) => {
            tracing::error!(error = %msg, "Object storage upload failed");
            Error::Internal("File upload failed.".to_string())
        }
    }
}

async fn read_file_field(
    field: axum::extract::multipart::Field<'_>,
) -> Result<FileUpload> {
    let filename = field
        .file_name()
        .unwrap_or("upload.bin")
        .to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| Error::Validation(format!("Failed to read upload: {}", e)))?;

    Ok(FileUpload {
        filename,
        content_type,
        bytes: bytes.to_vec(),
    })
}

/// POST /api/uploads — upload a single file (admin)
pub async fn upload_single(
    AdminUser(_ctx): AdminUser,
    State(state): State<MediaState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let upload = read_file_field(field).await?;
            let stored = store_upload(state.storage.as_ref(), upload)
                .await
                .map_err(map_storage_error)?;
            return Ok(Json(UploadResponse { url: stored.url }));
        }
    }

    Err(Error::Validation("No file uploaded.".to_string()))
}

/// POST /api/uploads/multiple — upload up to ten files (admin)
pub async fn upload_multiple(
    AdminUser(_ctx): AdminUser,
    State(state): State<MediaState>,
    mut multipart: Multipart,
) -> Result<Json<MultiUploadResponse>> {
    let mut uploads: Vec<FileUpload> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("files") {
            continue;
        }
        if uploads.len() >= MAX_FILES_PER_REQUEST {
            return Err(Error::Validation(format!(
                "At most {} files per request",
                MAX_FILES_PER_REQUEST
            )));
        }
        uploads.push(read_file_field(field).await?);
    }

    if uploads.is_empty() {
        return Err(Error::Validation("No files uploaded.".to_string()));
    }

    // Validate everything up front so a bad file rejects the whole batch
    // before any object lands in the bucket.
    for upload in &uploads {
        upload.validate().map_err(map_storage_error)?;
    }

    let mut urls = Vec::with_capacity(uploads.len());
    for upload in uploads {
        let stored = store_upload(state.storage.as_ref(), upload)
            .await
            .map_err(map_storage_error)?;
        urls.push(stored.url);
    }

    Ok(Json(MultiUploadResponse { urls }))
}
