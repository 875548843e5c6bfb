//! Media domain state and auth backend integration

use atelier_auth::AuthBackend;
use atelier_storage::ObjectStorage;
use axum::extract::FromRef;
use std::sync::Arc;

/// Application state for the Media domain
#[derive(Clone)]
pub struct MediaState {
    pub storage: Arc<dyn ObjectStorage>,
    pub auth: AuthBackend,
}

impl FromRef<MediaState> for AuthBackend {
    fn from_ref(state: &MediaState) -> Self {
        state.auth.clone()
    }
}
