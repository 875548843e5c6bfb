//! Route definitions for the Media domain API

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use atelier_storage::MAX_UPLOAD_BYTES;

use super::handlers::uploads;
use super::middleware::MediaState;

/// Create all Media domain API routes.
///
/// The body limit covers the per-file cap times the batch size, plus
/// multipart framing overhead.
pub fn routes() -> Router<MediaState> {
    let body_limit =
        MAX_UPLOAD_BYTES * uploads::MAX_FILES_PER_REQUEST + 1024 * 1024;

    Router::new()
        .route("/api/uploads", post(uploads::upload_single))
        .route("/api/uploads/multiple", post(uploads::upload_multiple))
        .layer(DefaultBodyLimit::max(body_limit))
}
