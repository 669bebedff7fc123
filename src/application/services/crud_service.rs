//! Generic business service for every entity.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::json;
use validator::Validate;

use crate::application::resources::Resource;
use crate::domain::repositories::{CrudRepository, RepositoryError, SoftDeleteRepository};
use crate::error::AppError;

/// Business service for entity `E` backed by repository `R`.
///
/// Validates input, converts between DTOs and entities, and turns repository
/// faults into [`AppError`]s:
/// - foreign key violations → [`AppError::Validation`]
/// - any other store failure → [`AppError::ExternalService`]
///
/// Soft-delete operations are only available when `R` implements
/// [`SoftDeleteRepository`].
pub struct CrudService<E, R> {
    repository: Arc<R>,
    _entity: PhantomData<fn() -> E>,
}

impl<E, R> CrudService<E, R>
where
    E: Resource,
    R: CrudRepository<Entity = E>,
{
    /// Creates a new service.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            _entity: PhantomData,
        }
    }

    /// Lists every record, soft-deleted ones included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ExternalService`] on database errors.
    pub async fn get_all(&self) -> Result<Vec<E::Dto>, AppError> {
        let rows = self
            .repository
            .find_all()
            .await
            .map_err(|e| persistence_error::<E>("list", e))?;

        Ok(rows.into_iter().map(Resource::into_dto).collect())
    }

    /// Retrieves one record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is not positive.
    /// Returns [`AppError::NotFound`] if no record has that id.
    /// Returns [`AppError::ExternalService`] on database errors.
    pub async fn get_by_id(&self, id: i32) -> Result<E::Dto, AppError> {
        ensure_valid_id::<E>(id)?;

        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| persistence_error::<E>("fetch", e))?
            .map(Resource::into_dto)
            .ok_or_else(|| not_found::<E>(id))
    }

    /// Validates and inserts a record. The id in `dto` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `dto` is invalid or references a
    /// missing parent row.
    /// Returns [`AppError::ExternalService`] on database errors.
    pub async fn create(&self, dto: E::Dto) -> Result<E::Dto, AppError> {
        dto.validate()?;
        let draft = E::draft_from(dto)?;

        let created = self
            .repository
            .create(draft)
            .await
            .map_err(|e| persistence_error::<E>("create", e))?;

        let dto = created.into_dto();
        tracing::info!(entity = E::LABEL, id = E::dto_id(&dto), "Record created");

        Ok(dto)
    }

    /// Overwrites every mutable field of record `id`. The id in `dto` is ignored.
    ///
    /// Returns `None` when no record has that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the id is not positive or `dto` is invalid.
    /// Returns [`AppError::ExternalService`] on database errors.
    pub async fn update(&self, id: i32, dto: E::Dto) -> Result<Option<E::Dto>, AppError> {
        ensure_valid_id::<E>(id)?;
        dto.validate()?;
        let draft = E::draft_from(dto)?;

        let updated = self
            .repository
            .update(id, draft)
            .await
            .map_err(|e| persistence_error::<E>("update", e))?;

        Ok(updated.map(Resource::into_dto))
    }

    /// Applies the fields present in `dto` to record `id`.
    ///
    /// Returns `None` when no record has that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is not positive or `dto` is invalid.
    /// Returns [`AppError::ExternalService`] on database errors.
    pub async fn partial_update(
        &self,
        id: i32,
        dto: E::PartialDto,
    ) -> Result<Option<E::Dto>, AppError> {
        ensure_valid_id::<E>(id)?;
        dto.validate()?;
        let patch = E::patch_from(dto)?;

        let updated = self
            .repository
            .patch(id, patch)
            .await
            .map_err(|e| persistence_error::<E>("patch", e))?;

        Ok(updated.map(Resource::into_dto))
    }

    /// Permanently removes record `id`. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is not positive.
    /// Returns [`AppError::ExternalService`] on database errors.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        ensure_valid_id::<E>(id)?;

        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(|e| persistence_error::<E>("delete", e))?;

        if deleted {
            tracing::info!(entity = E::LABEL, id, "Record deleted");
        }

        Ok(deleted)
    }
}

impl<E, R> CrudService<E, R>
where
    E: Resource,
    R: SoftDeleteRepository<Entity = E>,
{
    /// Lists records that are not soft-deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ExternalService`] on database errors.
    pub async fn get_all_active(&self) -> Result<Vec<E::Dto>, AppError> {
        let rows = self
            .repository
            .find_all_active()
            .await
            .map_err(|e| persistence_error::<E>("list active", e))?;

        Ok(rows.into_iter().map(Resource::into_dto).collect())
    }

    /// Marks record `id` as deleted without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is not positive.
    /// Returns [`AppError::NotFound`] if no record has that id.
    /// Returns [`AppError::ExternalService`] on database errors.
    pub async fn soft_delete(&self, id: i32) -> Result<(), AppError> {
        ensure_valid_id::<E>(id)?;

        let found = self
            .repository
            .soft_delete(id)
            .await
            .map_err(|e| persistence_error::<E>("soft delete", e))?;

        if !found {
            return Err(not_found::<E>(id));
        }

        tracing::info!(entity = E::LABEL, id, "Record soft-deleted");
        Ok(())
    }

    /// Clears the deletion mark of record `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is not positive.
    /// Returns [`AppError::NotFound`] if no record has that id.
    /// Returns [`AppError::ExternalService`] on database errors.
    pub async fn restore(&self, id: i32) -> Result<(), AppError> {
        ensure_valid_id::<E>(id)?;

        let found = self
            .repository
            .restore(id)
            .await
            .map_err(|e| persistence_error::<E>("restore", e))?;

        if !found {
            return Err(not_found::<E>(id));
        }

        tracing::info!(entity = E::LABEL, id, "Record restored");
        Ok(())
    }
}

fn ensure_valid_id<E: Resource>(id: i32) -> Result<(), AppError> {
    if id <= 0 {
        tracing::warn!(entity = E::LABEL, id, "Rejected non-positive id");
        return Err(AppError::bad_request(
            format!("{} id must be greater than zero", E::LABEL),
            json!({ "id": id }),
        ));
    }
    Ok(())
}

/// Builds the 404 for an absent `E` row and logs it at info level.
pub(crate) fn not_found<E: Resource>(id: i32) -> AppError {
    tracing::info!(entity = E::LABEL, id, "Record not found");
    AppError::not_found(
        format!("{} with id {} not found", E::LABEL, id),
        json!({ "id": id }),
    )
}

fn persistence_error<E: Resource>(action: &str, err: RepositoryError) -> AppError {
    if err.is_foreign_key_violation() {
        tracing::warn!(entity = E::LABEL, action, error = %err, "Foreign key violation");
        return AppError::bad_request(
            format!("{} references a record that does not exist", E::LABEL),
            json!({ "action": action }),
        );
    }

    tracing::error!(entity = E::LABEL, action, error = %err, "Repository operation failed");
    AppError::external(format!("Failed to {} {}", action, E::LABEL), err)
}
