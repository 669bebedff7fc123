//! Activity DTOs and mapping.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Resource, non_blank, not_blank, nullable_non_blank};
use crate::domain::entities::{Activity, ActivityPatch, NewActivity};
use crate::error::AppError;

/// `price` and `durationHours` travel as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDto {
    #[serde(default)]
    pub activity_id: i32,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Activity name is required"))]
    pub name: String,

    pub description: Option<String>,
    pub category: Option<String>,

    #[serde(default)]
    pub price: Decimal,

    #[serde(default)]
    pub duration_hours: Decimal,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPartialDto {
    pub name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub category: Option<Option<String>>,

    pub price: Option<Decimal>,
    pub duration_hours: Option<Decimal>,
}

impl Resource for Activity {
    type Dto = ActivityDto;
    type PartialDto = ActivityPartialDto;

    fn dto_id(dto: &ActivityDto) -> i32 {
        dto.activity_id
    }

    fn into_dto(self) -> ActivityDto {
        ActivityDto {
            activity_id: self.activity_id,
            name: self.name,
            description: self.description,
            category: self.category,
            price: self.price,
            duration_hours: self.duration_hours,
        }
    }

    fn draft_from(dto: ActivityDto) -> Result<NewActivity, AppError> {
        Ok(NewActivity {
            name: dto.name,
            description: dto.description,
            category: dto.category,
            price: dto.price,
            duration_hours: dto.duration_hours,
        })
    }

    fn patch_from(dto: ActivityPartialDto) -> Result<ActivityPatch, AppError> {
        Ok(ActivityPatch {
            name: non_blank(dto.name),
            description: nullable_non_blank(dto.description),
            category: nullable_non_blank(dto.category),
            price: dto.price,
            duration_hours: dto.duration_hours,
        })
    }
}
