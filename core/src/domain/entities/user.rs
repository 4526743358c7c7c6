//! User entity representing a registered account in the Contact Search system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Can view and search contacts
    User,
    /// Can perform all operations including user management
    Admin,
    /// Can manage contacts but not users
    Moderator,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "USER"),
            Role::Admin => write!(f, "ADMIN"),
            Role::Moderator => write!(f, "MODERATOR"),
        }
    }
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique username used as the token subject
    pub username: String,

    /// Unique email address
    pub email: String,

    /// Hashed password; never the plaintext
    pub password_hash: String,

    /// User's first name
    pub first_name: String,

    /// User's last name
    pub last_name: String,

    /// Role assigned to the account
    pub role: Role,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with the given role
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            first_name,
            last_name,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Checks if the user holds the admin role
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "alice".to_string(),
            "alice@x.com".to_string(),
            "$2b$12$hash".to_string(),
            "Alice".to_string(),
            "Smith".to_string(),
            Role::User,
        )
    }

    #[test]
    fn test_new_user_creation() {
        let user = sample_user();

        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@x.com");
        assert_eq!(user.role, Role::User);
        assert!(!user.is_admin());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_set_password_hash() {
        let mut user = sample_user();
        user.set_password_hash("$2b$12$newhash".to_string());

        assert_eq!(user.password_hash, "$2b$12$newhash");
        assert!(user.updated_at >= user.created_at);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(
            serde_json::to_string(&Role::Moderator).unwrap(),
            "\"MODERATOR\""
        );
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Moderator.to_string(), "MODERATOR");
    }
}
