//! Concrete authentication backend
//!
//! Wraps `PgPool` + `AuthConfig` and owns auth-specific SQL queries.
//! Uses runtime `sqlx::query_as` (not macros) consistent with the
//! repository pattern used by the domain crates.

use sqlx::PgPool;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::password::verify_password;
use crate::types::{AccountRole, AuthIdentity};

/// Row type for credential lookup (includes password_hash for verification)
#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: Uuid,
    email: String,
    name: String,
    role: AccountRole,
    password_hash: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

/// Concrete authentication backend.
///
/// Wraps a database pool and auth configuration. Provides user lookup,
/// credential verification, and token issue/validation.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    pool: PgPool,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(pool: PgPool, config: AuthConfig) -> Self {
        Self { pool, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Find user identity by ID (lightweight subset of User)
    pub(crate) async fn find_user(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError> {
        let user: Option<AuthIdentity> = sqlx::query_as(
            r#"
            SELECT id, email, name, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %id, "Failed to load user");
            AuthError::UserLoadError
        })?;

        Ok(user)
    }

    /// Verify an email/password pair against the user store.
    ///
    /// Returns the identity on success. A missing account and a wrong
    /// password produce the same error so the response does not leak
    /// which emails are registered.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthIdentity, AuthError> {
        let row: Option<CredentialRow> = sqlx::query_as(
            r#"
            SELECT id, email, name, role, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to query user by email");
            AuthError::AuthenticationFailed
        })?;

        let row = row.ok_or(AuthError::InvalidCredentials)?;

        let matches = verify_password(password, &row.password_hash).map_err(|e| {
            tracing::error!(error = %e, user_id = %row.id, "Corrupt password hash");
            AuthError::PasswordHash
        })?;

        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(AuthIdentity {
            id: row.id,
            email: row.email,
            name: row.name,
            role: row.role,
            created_at: row.created_at,
        })
    }

    /// Issue a signed JWT for a verified identity
    pub fn issue_token(&self, identity: &AuthIdentity) -> Result<String, AuthError> {
        crate::jwt::issue_jwt_token(identity, &self.config)
    }

    /// Shared JWT authentication logic used by the extractors.
    pub(crate) async fn authenticate_jwt(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = crate::jwt::validate_jwt_token(token, &self.config)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidUserId)?;

        let user = self
            .find_user(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(AuthContext::new(user))
    }
}
