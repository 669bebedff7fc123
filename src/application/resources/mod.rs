//! DTO shapes exchanged over the API and their mapping to domain entities.
//!
//! Each entity implements [`Resource`], which is the only place where DTO and
//! entity fields are copied into each other.
//!
//! # Partial updates
//!
//! Partial DTOs mark every field optional:
//! - absent field → unchanged
//! - blank string on a text field → unchanged
//! - `null` on a nullable field → cleared
//! - any other value (including `0` and `false`) → overwritten

use serde::{Serialize, de::DeserializeOwned};
use validator::{Validate, ValidationError};

use crate::domain::entities::Entity;
use crate::error::AppError;

pub mod activity;
pub mod change_log;
pub mod destination;
pub mod form;
pub mod form_module;
pub mod module;
pub mod payment;
pub mod permission;
pub mod person;
pub mod rol;
pub mod rol_form_permission;
pub mod rol_permission;
pub mod user;
pub mod user_activity;
pub mod user_rol;

pub use activity::{ActivityDto, ActivityPartialDto};
pub use change_log::{ChangeLogDto, ChangeLogPartialDto};
pub use destination::{DestinationDto, DestinationPartialDto};
pub use form::{FormDto, FormPartialDto};
pub use form_module::{FormModuleDto, FormModulePartialDto};
pub use module::{ModuleDto, ModulePartialDto};
pub use payment::{PaymentDto, PaymentPartialDto};
pub use permission::{PermissionDto, PermissionPartialDto};
pub use person::{PersonDto, PersonPartialDto};
pub use rol::{RolDto, RolPartialDto};
pub use rol_form_permission::{RolFormPermissionDto, RolFormPermissionPartialDto};
pub use rol_permission::{RolPermissionDto, RolPermissionPartialDto};
pub use user::{UserDto, UserPartialDto};
pub use user_activity::{UserActivityDto, UserActivityPartialDto};
pub use user_rol::{UserRolDto, UserRolPartialDto};

/// An entity exposed through the API.
pub trait Resource: Entity + Sized {
    /// Full representation, used for responses, creation and full overwrite.
    type Dto: Serialize + DeserializeOwned + Validate + Send + Sync + 'static;

    /// Representation accepted by partial updates.
    type PartialDto: DeserializeOwned + Validate + Send + 'static;

    /// Identifier carried by a DTO.
    fn dto_id(dto: &Self::Dto) -> i32;

    fn into_dto(self) -> Self::Dto;

    /// Builds the insert/overwrite draft. Runs after `Dto` validation.
    fn draft_from(dto: Self::Dto) -> Result<Self::Draft, AppError>;

    fn patch_from(dto: Self::PartialDto) -> Result<Self::Patch, AppError>;
}

/// Rejects empty and whitespace-only strings.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Drops blank values so they leave the stored column untouched.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Like [`non_blank`] for nullable columns: `Some(None)` still clears.
pub(crate) fn nullable_non_blank(value: Option<Option<String>>) -> Option<Option<String>> {
    match value {
        Some(Some(v)) if v.trim().is_empty() => None,
        other => other,
    }
}
