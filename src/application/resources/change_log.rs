//! Change log DTOs and mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Resource, non_blank, not_blank};
use crate::domain::entities::{ChangeLog, ChangeLogPatch, NewChangeLog};
use crate::error::AppError;

/// `changeDate` is optional on input and defaults to the insertion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLogDto {
    #[serde(default)]
    pub change_log_id: i32,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Change description is required"))]
    pub description: String,

    pub change_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLogPartialDto {
    pub description: Option<String>,
    pub change_date: Option<DateTime<Utc>>,
}

impl Resource for ChangeLog {
    type Dto = ChangeLogDto;
    type PartialDto = ChangeLogPartialDto;

    fn dto_id(dto: &ChangeLogDto) -> i32 {
        dto.change_log_id
    }

    fn into_dto(self) -> ChangeLogDto {
        ChangeLogDto {
            change_log_id: self.change_log_id,
            description: self.description,
            change_date: Some(self.change_date),
        }
    }

    fn draft_from(dto: ChangeLogDto) -> Result<NewChangeLog, AppError> {
        Ok(NewChangeLog {
            description: dto.description,
            change_date: dto.change_date,
        })
    }

    fn patch_from(dto: ChangeLogPartialDto) -> Result<ChangeLogPatch, AppError> {
        Ok(ChangeLogPatch {
            description: non_blank(dto.description),
            change_date: dto.change_date,
        })
    }
}
