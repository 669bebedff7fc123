//! Permission DTOs and mapping.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Resource, non_blank, not_blank, nullable_non_blank};
use crate::domain::entities::{NewPermission, Permission, PermissionPatch};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDto {
    #[serde(default)]
    pub permission_id: i32,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Permission name is required"))]
    pub permission_name: String,

    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PermissionPartialDto {
    pub permission_name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
}

impl Resource for Permission {
    type Dto = PermissionDto;
    type PartialDto = PermissionPartialDto;

    fn dto_id(dto: &PermissionDto) -> i32 {
        dto.permission_id
    }

    fn into_dto(self) -> PermissionDto {
        PermissionDto {
            permission_id: self.permission_id,
            permission_name: self.permission_name,
            description: self.description,
        }
    }

    fn draft_from(dto: PermissionDto) -> Result<NewPermission, AppError> {
        Ok(NewPermission {
            permission_name: dto.permission_name,
            description: dto.description,
        })
    }

    fn patch_from(dto: PermissionPartialDto) -> Result<PermissionPatch, AppError> {
        Ok(PermissionPatch {
            permission_name: non_blank(dto.permission_name),
            description: nullable_non_blank(dto.description),
        })
    }
}
