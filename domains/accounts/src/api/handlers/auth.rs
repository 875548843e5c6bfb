//! Account registration and credential login handlers
//!
//! Implements:
//! - POST /api/auth/register — create a member account
//! - POST /api/auth/login — verify credentials, return a signed JWT
//! - GET  /api/auth/whoami — return the authentication context

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use atelier_auth::{AccountRole, AuthError, AuthUser};
use atelier_common::{Error, Result, ValidatedJson};

use crate::api::middleware::AccountsState;
use crate::domain::entities::User;

/// Public view of a user account
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            role: u.role,
            created_at: u.created_at,
        }
    }
}

/// Request for registering an account
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Request for logging in
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Successful login response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Response shape for `GET /api/auth/whoami`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoamiResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: AccountRole,
}

/// POST /api/auth/register — create a member account.
///
/// Admin role is never granted here; it is assigned out-of-band on the
/// stored user row.
pub async fn register(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let user = User::register(req.email, req.name, &req.password)?;
    let created = state.repos.users.create(&user).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// POST /api/auth/login — verify credentials and issue a JWT
pub async fn login(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let identity = state
        .auth
        .verify_credentials(&req.email, &req.password)
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredentials => {
                Error::Authentication("Invalid email or password".to_string())
            }
            _ => Error::Internal("Authentication backend failure".to_string()),
        })?;

    let token = state
        .auth
        .issue_token(&identity)
        .map_err(|_| Error::Internal("Failed to issue token".to_string()))?;

    let user = state
        .repos
        .users
        .get_by_id(identity.id)
        .await?
        .ok_or_else(|| Error::Internal("User vanished after login".to_string()))?;

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// GET /api/auth/whoami — return authentication context for the caller
pub async fn whoami(AuthUser(ctx): AuthUser) -> Result<Json<WhoamiResponse>> {
    Ok(Json(WhoamiResponse {
        id: ctx.user.id,
        email: ctx.user.email,
        name: ctx.user.name,
        role: ctx.user.role,
    }))
}
