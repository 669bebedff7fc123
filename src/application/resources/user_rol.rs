//! User-role assignment DTOs and mapping.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Resource;
use crate::domain::entities::{NewUserRol, UserRol, UserRolPatch};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRolDto {
    #[serde(default)]
    pub user_rol_id: i32,

    #[serde(default)]
    #[validate(range(min = 1, message = "userId must reference an existing record"))]
    pub user_id: i32,

    #[serde(default)]
    #[validate(range(min = 1, message = "rolId must reference an existing record"))]
    pub rol_id: i32,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRolPartialDto {
    #[validate(range(min = 1, message = "userId must reference an existing record"))]
    pub user_id: Option<i32>,

    #[validate(range(min = 1, message = "rolId must reference an existing record"))]
    pub rol_id: Option<i32>,
}

impl Resource for UserRol {
    type Dto = UserRolDto;
    type PartialDto = UserRolPartialDto;

    fn dto_id(dto: &UserRolDto) -> i32 {
        dto.user_rol_id
    }

    fn into_dto(self) -> UserRolDto {
        UserRolDto {
            user_rol_id: self.user_rol_id,
            user_id: self.user_id,
            rol_id: self.rol_id,
        }
    }

    fn draft_from(dto: UserRolDto) -> Result<NewUserRol, AppError> {
        Ok(NewUserRol {
            user_id: dto.user_id,
            rol_id: dto.rol_id,
        })
    }

    fn patch_from(dto: UserRolPartialDto) -> Result<UserRolPatch, AppError> {
        Ok(UserRolPatch {
            user_id: dto.user_id,
            rol_id: dto.rol_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_foreign_keys_must_be_positive() {
        let dto: UserRolDto = serde_json::from_value(json!({"userId": 1})).unwrap();
        let err = AppError::from(dto.validate().unwrap_err());

        assert_eq!(err.to_string(), "rolId must reference an existing record");
    }

    #[test]
    fn test_partial_rejects_zero_but_allows_absent() {
        let absent: UserRolPartialDto = serde_json::from_value(json!({})).unwrap();
        assert!(absent.validate().is_ok());

        let zero: UserRolPartialDto = serde_json::from_value(json!({"rolId": 0})).unwrap();
        assert!(zero.validate().is_err());
    }
}
