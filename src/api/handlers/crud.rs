//! Generic handlers shared by every entity resource.
//!
//! Each handler extracts its `Arc<CrudService<E, R>>` from router state via
//! `FromRef`, so one function serves all entities. Routes are wired in
//! [`crate::api::routes`].

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::MessageResponse;
use crate::api::extractors::{IdPath, JsonBody};
use crate::application::resources::Resource;
use crate::application::services::{CrudService, not_found};
use crate::domain::repositories::{CrudRepository, SoftDeleteRepository};
use crate::error::AppError;

type Service<E, R> = State<Arc<CrudService<E, R>>>;

/// `GET /api/{Entity}`
pub async fn list<E, R>(State(service): Service<E, R>) -> Result<Json<Vec<E::Dto>>, AppError>
where
    E: Resource,
    R: CrudRepository<Entity = E>,
{
    Ok(Json(service.get_all().await?))
}

/// `GET /api/{Entity}/active`
pub async fn list_active<E, R>(
    State(service): Service<E, R>,
) -> Result<Json<Vec<E::Dto>>, AppError>
where
    E: Resource,
    R: SoftDeleteRepository<Entity = E>,
{
    Ok(Json(service.get_all_active().await?))
}

/// `GET /api/{Entity}/{id}`
///
/// # Errors
///
/// Returns 400 for a non-positive or non-numeric id.
/// Returns 404 if the record does not exist.
pub async fn get_by_id<E, R>(
    State(service): Service<E, R>,
    IdPath(id): IdPath,
) -> Result<Json<E::Dto>, AppError>
where
    E: Resource,
    R: CrudRepository<Entity = E>,
{
    Ok(Json(service.get_by_id(id).await?))
}

/// `POST /api/{Entity}`
///
/// Responds 201 with the stored record and a `Location` header pointing at it.
///
/// # Errors
///
/// Returns 400 if the body is malformed, fails validation, or references a
/// missing parent record.
pub async fn create<E, R>(
    State(service): Service<E, R>,
    uri: Uri,
    JsonBody(dto): JsonBody<E::Dto>,
) -> Result<Response, AppError>
where
    E: Resource,
    R: CrudRepository<Entity = E>,
{
    let created = service.create(dto).await?;
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), E::dto_id(&created));

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

/// `PUT /api/{Entity}/{id}`
///
/// The path id wins over any id in the body.
///
/// # Errors
///
/// Returns 400 on invalid input, 404 if the record does not exist.
pub async fn update<E, R>(
    State(service): Service<E, R>,
    IdPath(id): IdPath,
    JsonBody(dto): JsonBody<E::Dto>,
) -> Result<Json<E::Dto>, AppError>
where
    E: Resource,
    R: CrudRepository<Entity = E>,
{
    service
        .update(id, dto)
        .await?
        .map(Json)
        .ok_or_else(|| not_found::<E>(id))
}

/// `PATCH /api/{Entity}/{id}`
///
/// Only fields present in the body are applied. `null` clears nullable
/// fields; blank strings are ignored.
///
/// # Errors
///
/// Returns 400 on invalid input, 404 if the record does not exist.
pub async fn partial_update<E, R>(
    State(service): Service<E, R>,
    IdPath(id): IdPath,
    JsonBody(dto): JsonBody<E::PartialDto>,
) -> Result<Json<E::Dto>, AppError>
where
    E: Resource,
    R: CrudRepository<Entity = E>,
{
    service
        .partial_update(id, dto)
        .await?
        .map(Json)
        .ok_or_else(|| not_found::<E>(id))
}

/// `DELETE /api/{Entity}/{id}` answering with a confirmation message.
pub async fn delete<E, R>(
    State(service): Service<E, R>,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>, AppError>
where
    E: Resource,
    R: CrudRepository<Entity = E>,
{
    if !service.delete(id).await? {
        return Err(not_found::<E>(id));
    }

    Ok(Json(MessageResponse::new(format!(
        "{} {} deleted permanently",
        E::LABEL,
        id
    ))))
}

/// `DELETE /api/{Entity}/{id}` answering with 204.
pub async fn delete_no_content<E, R>(
    State(service): Service<E, R>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError>
where
    E: Resource,
    R: CrudRepository<Entity = E>,
{
    if !service.delete(id).await? {
        return Err(not_found::<E>(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/{Entity}/softdelete/{id}`
pub async fn soft_delete<E, R>(
    State(service): Service<E, R>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError>
where
    E: Resource,
    R: SoftDeleteRepository<Entity = E>,
{
    service.soft_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PATCH /api/{Entity}/restore/{id}`
pub async fn restore<E, R>(
    State(service): Service<E, R>,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>, AppError>
where
    E: Resource,
    R: SoftDeleteRepository<Entity = E>,
{
    service.restore(id).await?;

    Ok(Json(MessageResponse::new(format!(
        "{} {} restored",
        E::LABEL,
        id
    ))))
}
