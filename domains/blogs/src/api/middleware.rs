//! Blogs domain state and auth backend integration

use crate::repository::BlogsRepositories;
use atelier_auth::AuthBackend;
use axum::extract::FromRef;

/// Application state for the Blogs domain
#[derive(Clone)]
pub struct BlogsState {
    pub repos: BlogsRepositories,
    pub auth: AuthBackend,
}

impl FromRef<BlogsState> for AuthBackend {
    fn from_ref(state: &BlogsState) -> Self {
        state.auth.clone()
    }
}
