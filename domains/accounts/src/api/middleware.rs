//! Accounts domain state and auth backend integration

use crate::repository::AccountsRepositories;
use atelier_auth::AuthBackend;
use axum::extract::FromRef;

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub repos: AccountsRepositories,
    pub auth: AuthBackend,
}

impl FromRef<AccountsState> for AuthBackend {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth.clone()
    }
}
