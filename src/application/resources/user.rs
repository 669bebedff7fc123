//! User DTOs and mapping.
//!
//! `password` is write-only: accepted on input, hashed with Argon2id before it
//! reaches persistence, and never serialized back. A missing password on
//! create or full update is hashed as the empty string.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Resource, non_blank, not_blank};
use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::AppError;
use crate::utils::password::hash_password;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default)]
    pub user_id: i32,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "User name is required"))]
    pub username: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, skip_serializing)]
    pub password: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserPartialDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

fn hash(password: &str) -> Result<String, AppError> {
    hash_password(password).map_err(|e| {
        tracing::error!(error = %e, "Password hashing failed");
        AppError::external("Failed to process password", e)
    })
}

impl Resource for User {
    type Dto = UserDto;
    type PartialDto = UserPartialDto;

    fn dto_id(dto: &UserDto) -> i32 {
        dto.user_id
    }

    fn into_dto(self) -> UserDto {
        UserDto {
            user_id: self.user_id,
            username: self.username,
            email: self.email,
            password: String::new(),
        }
    }

    fn draft_from(dto: UserDto) -> Result<NewUser, AppError> {
        Ok(NewUser {
            password_hash: hash(&dto.password)?,
            username: dto.username,
            email: dto.email,
        })
    }

    fn patch_from(dto: UserPartialDto) -> Result<UserPatch, AppError> {
        let password_hash = match non_blank(dto.password) {
            Some(password) => Some(hash(&password)?),
            None => None,
        };

        Ok(UserPatch {
            username: non_blank(dto.username),
            email: non_blank(dto.email),
            password_hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::password::verify_password;
    use serde_json::json;

    #[test]
    fn test_password_is_never_serialized() {
        let dto = UserDto {
            user_id: 7,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        };

        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["userId"], 7);
        assert_eq!(value["username"], "alice");
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_draft_hashes_password() {
        let dto: UserDto = serde_json::from_value(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret"
        }))
        .unwrap();

        let draft = User::draft_from(dto).unwrap();

        assert_ne!(draft.password_hash, "secret");
        assert!(verify_password("secret", &draft.password_hash).unwrap());
    }

    #[test]
    fn test_empty_username_fails_validation() {
        let dto: UserDto =
            serde_json::from_value(json!({"username": "", "password": "secret"})).unwrap();

        let err = AppError::from(dto.validate().unwrap_err());

        assert!(err.to_string().contains("User name is required"));
    }

    #[test]
    fn test_missing_password_is_accepted_and_hashed() {
        let dto: UserDto =
            serde_json::from_value(json!({"username": "alice", "email": "a@x.io"})).unwrap();

        assert!(dto.validate().is_ok());

        let draft = User::draft_from(dto).unwrap();
        assert!(verify_password("", &draft.password_hash).unwrap());
    }

    #[test]
    fn test_partial_blank_password_keeps_existing_hash() {
        let dto: UserPartialDto =
            serde_json::from_value(json!({"password": " ", "email": "new@example.com"})).unwrap();

        let patch = User::patch_from(dto).unwrap();

        assert_eq!(patch.password_hash, None);
        assert_eq!(patch.email.as_deref(), Some("new@example.com"));
    }
}
