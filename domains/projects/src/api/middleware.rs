//! Projects domain state and auth backend integration

use crate::repository::ProjectsRepositories;
use atelier_auth::AuthBackend;
use atelier_email::EmailService;
use axum::extract::FromRef;
use std::sync::Arc;

/// Application state for the Projects domain
#[derive(Clone)]
pub struct ProjectsState {
    pub repos: ProjectsRepositories,
    pub auth: AuthBackend,
    pub email: Arc<dyn EmailService>,
    /// Address that receives submission notifications
    pub notify_email: String,
}

impl FromRef<ProjectsState> for AuthBackend {
    fn from_ref(state: &ProjectsState) -> Self {
        state.auth.clone()
    }
}
