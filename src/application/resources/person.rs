//! Person DTOs and mapping.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Resource, non_blank, not_blank};
use crate::domain::entities::{NewPerson, Person, PersonPatch};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    #[serde(default)]
    pub person_id: i32,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "First name is required"))]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub document: i64,

    #[serde(default)]
    pub phone_number: i64,

    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonPartialDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub document: Option<i64>,
    pub phone_number: Option<i64>,
    pub email: Option<String>,
}

impl Resource for Person {
    type Dto = PersonDto;
    type PartialDto = PersonPartialDto;

    fn dto_id(dto: &PersonDto) -> i32 {
        dto.person_id
    }

    fn into_dto(self) -> PersonDto {
        PersonDto {
            person_id: self.person_id,
            first_name: self.first_name,
            last_name: self.last_name,
            document: self.document,
            phone_number: self.phone_number,
            email: self.email,
        }
    }

    fn draft_from(dto: PersonDto) -> Result<NewPerson, AppError> {
        Ok(NewPerson {
            first_name: dto.first_name,
            last_name: dto.last_name,
            document: dto.document,
            phone_number: dto.phone_number,
            email: dto.email,
        })
    }

    fn patch_from(dto: PersonPartialDto) -> Result<PersonPatch, AppError> {
        Ok(PersonPatch {
            first_name: non_blank(dto.first_name),
            last_name: non_blank(dto.last_name),
            document: dto.document,
            phone_number: dto.phone_number,
            email: non_blank(dto.email),
        })
    }
}
