//! Domain entities for the Accounts domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_auth::{password, AccountRole};
use atelier_common::{Error, Result};

/// User account entity.
///
/// The password hash never serializes; responses use the handler DTOs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new member account from registration input.
    ///
    /// The plaintext password is strength-checked and hashed here; it is
    /// never stored. Admin role is granted out-of-band, not through
    /// registration.
    pub fn register(email: String, name: String, password: &str) -> Result<Self> {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(Error::Validation("email must be a valid address".to_string()));
        }
        if name.trim().is_empty() {
            return Err(Error::Validation("name is required".to_string()));
        }
        password::validate_password_strength(password).map_err(Error::Validation)?;

        let password_hash = password::hash_password(password)
            .map_err(|e| Error::Internal(format!("Password hashing failed: {}", e)))?;

        Ok(User {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            role: AccountRole::Member,
            created_at: Utc::now(),
        })
    }
}
