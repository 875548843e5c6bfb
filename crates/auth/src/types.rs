//! Auth read-model types
//!
//! Lightweight views of the user rows owned by the accounts domain.
//! These types carry only the fields needed for authentication and
//! authorization; handlers needing the full `User` load from the
//! accounts repository.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lightweight identity for authenticated users.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
}

/// Account role for auth decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Admin,
    Member,
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountRole::Admin => write!(f, "admin"),
            AccountRole::Member => write!(f, "member"),
        }
    }
}

impl std::str::FromStr for AccountRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(AccountRole::Admin),
            "member" => Ok(AccountRole::Member),
            other => Err(format!("Unknown account role: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_display_round_trip() {
        assert_eq!(
            AccountRole::from_str(&AccountRole::Admin.to_string()),
            Ok(AccountRole::Admin)
        );
        assert_eq!(
            AccountRole::from_str(&AccountRole::Member.to_string()),
            Ok(AccountRole::Member)
        );
    }

    #[test]
    fn test_role_from_str_rejects_unknown() {
        assert!(AccountRole::from_str("owner").is_err());
    }
}
