//! Role-form-permission grant DTOs and mapping.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Resource;
use crate::domain::entities::{NewRolFormPermission, RolFormPermission, RolFormPermissionPatch};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RolFormPermissionDto {
    #[serde(default)]
    pub rol_form_permission_id: i32,

    #[serde(default)]
    #[validate(range(min = 1, message = "rolId must reference an existing record"))]
    pub rol_id: i32,

    #[serde(default)]
    #[validate(range(min = 1, message = "formId must reference an existing record"))]
    pub form_id: i32,

    #[serde(default)]
    #[validate(range(min = 1, message = "permissionId must reference an existing record"))]
    pub permission_id: i32,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RolFormPermissionPartialDto {
    #[validate(range(min = 1, message = "rolId must reference an existing record"))]
    pub rol_id: Option<i32>,

    #[validate(range(min = 1, message = "formId must reference an existing record"))]
    pub form_id: Option<i32>,

    #[validate(range(min = 1, message = "permissionId must reference an existing record"))]
    pub permission_id: Option<i32>,
}

impl Resource for RolFormPermission {
    type Dto = RolFormPermissionDto;
    type PartialDto = RolFormPermissionPartialDto;

    fn dto_id(dto: &RolFormPermissionDto) -> i32 {
        dto.rol_form_permission_id
    }

    fn into_dto(self) -> RolFormPermissionDto {
        RolFormPermissionDto {
            rol_form_permission_id: self.rol_form_permission_id,
            rol_id: self.rol_id,
            form_id: self.form_id,
            permission_id: self.permission_id,
        }
    }

    fn draft_from(dto: RolFormPermissionDto) -> Result<NewRolFormPermission, AppError> {
        Ok(NewRolFormPermission {
            rol_id: dto.rol_id,
            form_id: dto.form_id,
            permission_id: dto.permission_id,
        })
    }

    fn patch_from(dto: RolFormPermissionPartialDto) -> Result<RolFormPermissionPatch, AppError> {
        Ok(RolFormPermissionPatch {
            rol_id: dto.rol_id,
            form_id: dto.form_id,
            permission_id: dto.permission_id,
        })
    }
}
