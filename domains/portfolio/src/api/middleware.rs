//! Portfolio domain state and auth backend integration

use crate::repository::PortfolioRepositories;
use atelier_auth::AuthBackend;
use axum::extract::FromRef;

/// Application state for the Portfolio domain
#[derive(Clone)]
pub struct PortfolioState {
    pub repos: PortfolioRepositories,
    pub auth: AuthBackend,
}

impl FromRef<PortfolioState> for AuthBackend {
    fn from_ref(state: &PortfolioState) -> Self {
        state.auth.clone()
    }
}
