//! Authorization context for authenticated users

use crate::types::{AccountRole, AuthIdentity};

/// Represents an authenticated user context
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: AuthIdentity,
}

impl AuthContext {
    /// Create new auth context for a user
    pub fn new(user: AuthIdentity) -> Self {
        Self { user }
    }

    /// Check if the authenticated account is an admin
    pub fn is_admin(&self) -> bool {
        self.user.role == AccountRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn identity(role: AccountRole) -> AuthIdentity {
        AuthIdentity {
            id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            name: "User".to_string(),
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_admin() {
        assert!(AuthContext::new(identity(AccountRole::Admin)).is_admin());
        assert!(!AuthContext::new(identity(AccountRole::Member)).is_admin());
    }
}
