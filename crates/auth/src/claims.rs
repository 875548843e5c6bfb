//! JWT claims types

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::AccountRole;

/// Claims carried in Atelier-issued JWTs
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Email
    pub email: String,
    /// Account role ("admin" or "member")
    pub role: AccountRole,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
    /// Issuer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Audience
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}

impl Claims {
    /// Build claims for a freshly authenticated user
    pub fn new(
        user_id: Uuid,
        email: String,
        role: AccountRole,
        ttl_hours: i64,
        issuer: Option<String>,
        audience: Option<String>,
    ) -> Self {
        let now = Utc::now();
        let expires = now + Duration::hours(ttl_hours);
        Self {
            sub: user_id.to_string(),
            email,
            role,
            iat: now.timestamp() as u64,
            exp: expires.timestamp() as u64,
            iss: issuer,
            aud: audience,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_expiry_after_issue() {
        let claims = Claims::new(
            Uuid::new_v4(),
            "a@b.com".to_string(),
            AccountRole::Member,
            24,
            None,
            None,
        );
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }
}
