//! User account entity.

use chrono::{DateTime, Utc};

use super::Entity;

/// A user account.
///
/// Only the Argon2id hash of the password is stored.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub registration_date: DateTime<Utc>,
    pub create_at: DateTime<Utc>,
    pub delete_at: Option<DateTime<Utc>>,
}

impl User {
    /// Returns `true` when the account has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.delete_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Partial update for a user. A new password arrives already hashed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

impl Entity for User {
    const LABEL: &'static str = "User";
    type Draft = NewUser;
    type Patch = UserPatch;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_deleted() {
        let mut user = User {
            user_id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            registration_date: Utc::now(),
            create_at: Utc::now(),
            delete_at: None,
        };
        assert!(!user.is_deleted());

        user.delete_at = Some(Utc::now());
        assert!(user.is_deleted());
    }
}
