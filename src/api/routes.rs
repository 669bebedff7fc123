//! API route configuration.
//!
//! Every entity gets the same route set under `/api/{Entity}`, built from the
//! generic handlers in [`crate::api::handlers::crud`]. Soft-delete routes are
//! only added for entities whose table carries a `delete_at` column.

use std::sync::Arc;

use axum::{
    Router,
    extract::FromRef,
    routing::{delete, get, patch},
};

use crate::api::handlers::crud;
use crate::application::resources::Resource;
use crate::application::services::CrudService;
use crate::domain::entities::{
    Activity, ChangeLog, Destination, Form, FormModule, Module, Payment, Permission, Person, Rol,
    RolFormPermission, RolPermission, User, UserActivity, UserRol,
};
use crate::domain::repositories::{CrudRepository, SoftDeleteRepository};
use crate::infrastructure::persistence::{
    PgActivityRepository, PgChangeLogRepository, PgDestinationRepository, PgFormModuleRepository,
    PgFormRepository, PgModuleRepository, PgPaymentRepository, PgPermissionRepository,
    PgPersonRepository, PgRolFormPermissionRepository, PgRolPermissionRepository,
    PgRolRepository, PgUserActivityRepository, PgUserRepository, PgUserRolRepository,
};
use crate::state::AppState;

/// Response shape of `DELETE /api/{Entity}/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteResponse {
    /// 200 with `{"message": "..."}`.
    Message,
    /// 204 with an empty body.
    NoContent,
}

/// Base CRUD routes for one entity.
///
/// # Endpoints
///
/// - `GET    {base}`       - List all records
/// - `POST   {base}`       - Create a record
/// - `GET    {base}/{id}`  - Fetch one record
/// - `PUT    {base}/{id}`  - Overwrite a record
/// - `PATCH  {base}/{id}`  - Partially update a record
/// - `DELETE {base}/{id}`  - Permanently delete a record
pub fn resource_routes<E, R, S>(base: &str, delete_response: DeleteResponse) -> Router<S>
where
    E: Resource,
    R: CrudRepository<Entity = E>,
    S: Clone + Send + Sync + 'static,
    Arc<CrudService<E, R>>: FromRef<S>,
{
    let by_id = format!("{base}/{{id}}");

    let router = Router::new()
        .route(base, get(crud::list::<E, R>).post(crud::create::<E, R>))
        .route(
            &by_id,
            get(crud::get_by_id::<E, R>)
                .put(crud::update::<E, R>)
                .patch(crud::partial_update::<E, R>),
        );

    match delete_response {
        DeleteResponse::Message => router.route(&by_id, delete(crud::delete::<E, R>)),
        DeleteResponse::NoContent => {
            router.route(&by_id, delete(crud::delete_no_content::<E, R>))
        }
    }
}

/// [`resource_routes`] plus the soft-delete routes.
///
/// # Endpoints
///
/// - `GET    {base}/active`          - List records that are not soft-deleted
/// - `DELETE {base}/softdelete/{id}` - Mark a record as deleted
/// - `PATCH  {base}/restore/{id}`    - Clear the deletion mark
pub fn soft_delete_resource_routes<E, R, S>(
    base: &str,
    delete_response: DeleteResponse,
) -> Router<S>
where
    E: Resource,
    R: SoftDeleteRepository<Entity = E>,
    S: Clone + Send + Sync + 'static,
    Arc<CrudService<E, R>>: FromRef<S>,
{
    resource_routes::<E, R, S>(base, delete_response)
        .route(&format!("{base}/active"), get(crud::list_active::<E, R>))
        .route(
            &format!("{base}/softdelete/{{id}}"),
            delete(crud::soft_delete::<E, R>),
        )
        .route(
            &format!("{base}/restore/{{id}}"),
            patch(crud::restore::<E, R>),
        )
}

/// All entity routes under `/api`.
pub fn api_routes() -> Router<AppState> {
    use DeleteResponse::{Message, NoContent};

    Router::new()
        .merge(soft_delete_resource_routes::<Activity, PgActivityRepository, _>(
            "/api/Activity",
            Message,
        ))
        .merge(soft_delete_resource_routes::<Destination, PgDestinationRepository, _>(
            "/api/Destination",
            Message,
        ))
        .merge(soft_delete_resource_routes::<Form, PgFormRepository, _>("/api/Form", Message))
        .merge(soft_delete_resource_routes::<Module, PgModuleRepository, _>("/api/Module", Message))
        .merge(soft_delete_resource_routes::<Permission, PgPermissionRepository, _>(
            "/api/Permission",
            Message,
        ))
        .merge(soft_delete_resource_routes::<Rol, PgRolRepository, _>("/api/Rol", Message))
        .merge(soft_delete_resource_routes::<User, PgUserRepository, _>("/api/User", NoContent))
        .merge(soft_delete_resource_routes::<UserRol, PgUserRolRepository, _>(
            "/api/UserRol",
            Message,
        ))
        .merge(soft_delete_resource_routes::<RolPermission, PgRolPermissionRepository, _>(
            "/api/RolPermission",
            Message,
        ))
        .merge(soft_delete_resource_routes::<RolFormPermission, PgRolFormPermissionRepository, _>(
            "/api/RolFormPermission",
            Message,
        ))
        .merge(soft_delete_resource_routes::<UserActivity, PgUserActivityRepository, _>(
            "/api/UserActivity",
            Message,
        ))
        .merge(soft_delete_resource_routes::<FormModule, PgFormModuleRepository, _>(
            "/api/FormModule",
            Message,
        ))
        .merge(resource_routes::<Payment, PgPaymentRepository, _>("/api/Payment", Message))
        .merge(resource_routes::<Person, PgPersonRepository, _>("/api/Person", Message))
        .merge(resource_routes::<ChangeLog, PgChangeLogRepository, _>("/api/ChangeLog", Message))
}
