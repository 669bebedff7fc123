//! Destination DTOs and mapping.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Resource, non_blank, not_blank, nullable_non_blank};
use crate::domain::entities::{Destination, DestinationPatch, NewDestination};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDto {
    #[serde(default)]
    pub destination_id: i32,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Destination name is required"))]
    pub name: String,

    pub description: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DestinationPartialDto {
    pub name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub country: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub region: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub latitude: Option<Option<Decimal>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub longitude: Option<Option<Decimal>>,
}

impl Resource for Destination {
    type Dto = DestinationDto;
    type PartialDto = DestinationPartialDto;

    fn dto_id(dto: &DestinationDto) -> i32 {
        dto.destination_id
    }

    fn into_dto(self) -> DestinationDto {
        DestinationDto {
            destination_id: self.destination_id,
            name: self.name,
            description: self.description,
            country: self.country,
            region: self.region,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    fn draft_from(dto: DestinationDto) -> Result<NewDestination, AppError> {
        Ok(NewDestination {
            name: dto.name,
            description: dto.description,
            country: dto.country,
            region: dto.region,
            latitude: dto.latitude,
            longitude: dto.longitude,
        })
    }

    fn patch_from(dto: DestinationPartialDto) -> Result<DestinationPatch, AppError> {
        Ok(DestinationPatch {
            name: non_blank(dto.name),
            description: nullable_non_blank(dto.description),
            country: nullable_non_blank(dto.country),
            region: nullable_non_blank(dto.region),
            latitude: dto.latitude,
            longitude: dto.longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coordinates_null_clears_and_zero_sets() {
        let dto: DestinationPartialDto =
            serde_json::from_value(json!({"latitude": null, "longitude": 0})).unwrap();
        let patch = Destination::patch_from(dto).unwrap();

        assert_eq!(patch.latitude, Some(None));
        assert_eq!(patch.longitude, Some(Some(Decimal::ZERO)));
        assert_eq!(patch.country, None);
    }

    #[test]
    fn test_into_dto_copies_every_field() {
        let destination = Destination {
            destination_id: 3,
            name: "Cartagena".to_string(),
            description: Some("Walled city".to_string()),
            country: Some("Colombia".to_string()),
            region: Some("Bolivar".to_string()),
            latitude: Some(Decimal::new(10391, 3)),
            longitude: Some(Decimal::new(-75479, 3)),
            create_at: chrono::Utc::now(),
            delete_at: None,
        };

        let dto = destination.clone().into_dto();

        assert_eq!(dto.destination_id, 3);
        assert_eq!(dto.name, destination.name);
        assert_eq!(dto.region, destination.region);
        assert_eq!(dto.longitude, destination.longitude);
    }
}
