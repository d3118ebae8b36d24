use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

/// Authenticated user context, passed by reference into application services.
///
/// Authentication itself happens outside this crate; a `Session` only
/// carries the identity it produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    user_id: UserId,
    email: Option<String>,
    role: UserRole,
}

impl Session {
    pub fn new(user_id: UserId, email: Option<String>, role: UserRole) -> Result<Self, DomainError> {
        if user_id.as_str().trim().is_empty() {
            return Err(DomainError::Unauthorized(
                "Session user id cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            user_id,
            email,
            role,
        })
    }

    pub fn for_user(user_id: UserId) -> Result<Self, DomainError> {
        Self::new(user_id, None, UserRole::User)
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Ensure the session owns a resource belonging to `owner`.
    /// Admins may act on any user's resources.
    pub fn ensure_owns(&self, owner: &UserId) -> Result<(), DomainError> {
        if self.is_admin() || &self.user_id == owner {
            Ok(())
        } else {
            Err(DomainError::Unauthorized(format!(
                "User {} cannot access resources of {}",
                self.user_id, owner
            )))
        }
    }
}
