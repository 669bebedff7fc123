//! Role DTOs and mapping.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Resource, non_blank, not_blank, nullable_non_blank};
use crate::domain::entities::{NewRol, Rol, RolPatch};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RolDto {
    #[serde(default)]
    pub rol_id: i32,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Rol name is required"))]
    pub rol_name: String,

    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RolPartialDto {
    pub rol_name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
}

impl Resource for Rol {
    type Dto = RolDto;
    type PartialDto = RolPartialDto;

    fn dto_id(dto: &RolDto) -> i32 {
        dto.rol_id
    }

    fn into_dto(self) -> RolDto {
        RolDto {
            rol_id: self.rol_id,
            rol_name: self.rol_name,
            description: self.description,
        }
    }

    fn draft_from(dto: RolDto) -> Result<NewRol, AppError> {
        Ok(NewRol {
            rol_name: dto.rol_name,
            description: dto.description,
        })
    }

    fn patch_from(dto: RolPartialDto) -> Result<RolPatch, AppError> {
        Ok(RolPatch {
            rol_name: non_blank(dto.rol_name),
            description: nullable_non_blank(dto.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dto_uses_camel_case() {
        let dto: RolDto =
            serde_json::from_value(json!({"rolName": "Admin", "description": "Full access"}))
                .unwrap();

        assert_eq!(dto.rol_id, 0);
        assert_eq!(dto.rol_name, "Admin");
        assert_eq!(dto.description.as_deref(), Some("Full access"));

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["rolName"], "Admin");
        assert!(value.get("rolId").is_some());
    }

    #[test]
    fn test_missing_name_fails_validation() {
        let dto: RolDto = serde_json::from_value(json!({"description": "x"})).unwrap();
        assert!(dto.validate().is_err());

        let blank: RolDto = serde_json::from_value(json!({"rolName": "   "})).unwrap();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_partial_distinguishes_null_from_absent() {
        let absent: RolPartialDto = serde_json::from_value(json!({})).unwrap();
        let patch = Rol::patch_from(absent).unwrap();
        assert_eq!(patch, RolPatch::default());

        let cleared: RolPartialDto =
            serde_json::from_value(json!({"description": null})).unwrap();
        let patch = Rol::patch_from(cleared).unwrap();
        assert_eq!(patch.description, Some(None));

        let blank: RolPartialDto =
            serde_json::from_value(json!({"rolName": "", "description": ""})).unwrap();
        let patch = Rol::patch_from(blank).unwrap();
        assert_eq!(patch, RolPatch::default());
    }
}
