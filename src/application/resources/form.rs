//! Form DTOs and mapping.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Resource, non_blank, not_blank};
use crate::domain::entities::{Form, FormPatch, NewForm};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FormDto {
    #[serde(default)]
    pub form_id: i32,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Form name is required"))]
    pub name: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FormPartialDto {
    pub name: Option<String>,
}

impl Resource for Form {
    type Dto = FormDto;
    type PartialDto = FormPartialDto;

    fn dto_id(dto: &FormDto) -> i32 {
        dto.form_id
    }

    fn into_dto(self) -> FormDto {
        FormDto {
            form_id: self.form_id,
            name: self.name,
        }
    }

    fn draft_from(dto: FormDto) -> Result<NewForm, AppError> {
        Ok(NewForm { name: dto.name })
    }

    fn patch_from(dto: FormPartialDto) -> Result<FormPatch, AppError> {
        Ok(FormPatch {
            name: non_blank(dto.name),
        })
    }
}
