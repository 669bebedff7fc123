//! Module DTOs and mapping.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Resource, non_blank, not_blank};
use crate::domain::entities::{Module, ModulePatch, NewModule};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDto {
    #[serde(default)]
    pub module_id: i32,

    #[serde(default)]
    pub code: i32,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Module name is required"))]
    pub name: String,

    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ModulePartialDto {
    pub code: Option<i32>,
    pub name: Option<String>,
    pub active: Option<bool>,
}

impl Resource for Module {
    type Dto = ModuleDto;
    type PartialDto = ModulePartialDto;

    fn dto_id(dto: &ModuleDto) -> i32 {
        dto.module_id
    }

    fn into_dto(self) -> ModuleDto {
        ModuleDto {
            module_id: self.module_id,
            code: self.code,
            name: self.name,
            active: self.active,
        }
    }

    fn draft_from(dto: ModuleDto) -> Result<NewModule, AppError> {
        Ok(NewModule {
            code: dto.code,
            name: dto.name,
            active: dto.active,
        })
    }

    fn patch_from(dto: ModulePartialDto) -> Result<ModulePatch, AppError> {
        Ok(ModulePatch {
            code: dto.code,
            name: non_blank(dto.name),
            active: dto.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_false_is_an_overwrite() {
        let dto: ModulePartialDto =
            serde_json::from_value(json!({"active": false, "code": 0})).unwrap();
        let patch = Module::patch_from(dto).unwrap();

        assert_eq!(patch.active, Some(false));
        assert_eq!(patch.code, Some(0));
        assert_eq!(patch.name, None);
    }
}
