//! Role-permission grant DTOs and mapping.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Resource;
use crate::domain::entities::{NewRolPermission, RolPermission, RolPermissionPatch};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RolPermissionDto {
    #[serde(default)]
    pub rol_permission_id: i32,

    #[serde(default)]
    #[validate(range(min = 1, message = "rolId must reference an existing record"))]
    pub rol_id: i32,

    #[serde(default)]
    #[validate(range(min = 1, message = "permissionId must reference an existing record"))]
    pub permission_id: i32,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RolPermissionPartialDto {
    #[validate(range(min = 1, message = "rolId must reference an existing record"))]
    pub rol_id: Option<i32>,

    #[validate(range(min = 1, message = "permissionId must reference an existing record"))]
    pub permission_id: Option<i32>,
}

impl Resource for RolPermission {
    type Dto = RolPermissionDto;
    type PartialDto = RolPermissionPartialDto;

    fn dto_id(dto: &RolPermissionDto) -> i32 {
        dto.rol_permission_id
    }

    fn into_dto(self) -> RolPermissionDto {
        RolPermissionDto {
            rol_permission_id: self.rol_permission_id,
            rol_id: self.rol_id,
            permission_id: self.permission_id,
        }
    }

    fn draft_from(dto: RolPermissionDto) -> Result<NewRolPermission, AppError> {
        Ok(NewRolPermission {
            rol_id: dto.rol_id,
            permission_id: dto.permission_id,
        })
    }

    fn patch_from(dto: RolPermissionPartialDto) -> Result<RolPermissionPatch, AppError> {
        Ok(RolPermissionPatch {
            rol_id: dto.rol_id,
            permission_id: dto.permission_id,
        })
    }
}
