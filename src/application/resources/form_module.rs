//! Form-module membership DTOs and mapping.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Resource;
use crate::domain::entities::{NewFormModule, FormModule, FormModulePatch};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FormModuleDto {
    #[serde(default)]
    pub form_module_id: i32,

    #[serde(default)]
    #[validate(range(min = 1, message = "formId must reference an existing record"))]
    pub form_id: i32,

    #[serde(default)]
    #[validate(range(min = 1, message = "moduleId must reference an existing record"))]
    pub module_id: i32,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FormModulePartialDto {
    #[validate(range(min = 1, message = "formId must reference an existing record"))]
    pub form_id: Option<i32>,

    #[validate(range(min = 1, message = "moduleId must reference an existing record"))]
    pub module_id: Option<i32>,
}

impl Resource for FormModule {
    type Dto = FormModuleDto;
    type PartialDto = FormModulePartialDto;

    fn dto_id(dto: &FormModuleDto) -> i32 {
        dto.form_module_id
    }

    fn into_dto(self) -> FormModuleDto {
        FormModuleDto {
            form_module_id: self.form_module_id,
            form_id: self.form_id,
            module_id: self.module_id,
        }
    }

    fn draft_from(dto: FormModuleDto) -> Result<NewFormModule, AppError> {
        Ok(NewFormModule {
            form_id: dto.form_id,
            module_id: dto.module_id,
        })
    }

    fn patch_from(dto: FormModulePartialDto) -> Result<FormModulePatch, AppError> {
        Ok(FormModulePatch {
            form_id: dto.form_id,
            module_id: dto.module_id,
        })
    }
}
