//! User-activity booking DTOs and mapping.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Resource;
use crate::domain::entities::{NewUserActivity, UserActivity, UserActivityPatch};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserActivityDto {
    #[serde(default)]
    pub user_activity_id: i32,

    #[serde(default)]
    #[validate(range(min = 1, message = "userId must reference an existing record"))]
    pub user_id: i32,

    #[serde(default)]
    #[validate(range(min = 1, message = "activityId must reference an existing record"))]
    pub activity_id: i32,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserActivityPartialDto {
    #[validate(range(min = 1, message = "userId must reference an existing record"))]
    pub user_id: Option<i32>,

    #[validate(range(min = 1, message = "activityId must reference an existing record"))]
    pub activity_id: Option<i32>,
}

impl Resource for UserActivity {
    type Dto = UserActivityDto;
    type PartialDto = UserActivityPartialDto;

    fn dto_id(dto: &UserActivityDto) -> i32 {
        dto.user_activity_id
    }

    fn into_dto(self) -> UserActivityDto {
        UserActivityDto {
            user_activity_id: self.user_activity_id,
            user_id: self.user_id,
            activity_id: self.activity_id,
        }
    }

    fn draft_from(dto: UserActivityDto) -> Result<NewUserActivity, AppError> {
        Ok(NewUserActivity {
            user_id: dto.user_id,
            activity_id: dto.activity_id,
        })
    }

    fn patch_from(dto: UserActivityPartialDto) -> Result<UserActivityPatch, AppError> {
        Ok(UserActivityPatch {
            user_id: dto.user_id,
            activity_id: dto.activity_id,
        })
    }
}
