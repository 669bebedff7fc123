//! Shared application state injected into every handler.

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::application::resources::Resource;
use crate::application::services::CrudService;
use crate::domain::entities::{
    Activity, ChangeLog, Destination, Form, FormModule, Module, Payment, Permission, Person, Rol,
    RolFormPermission, RolPermission, User, UserActivity, UserRol,
};
use crate::domain::repositories::CrudRepository;
use crate::infrastructure::persistence::{
    PgActivityRepository, PgChangeLogRepository, PgDestinationRepository, PgFormModuleRepository,
    PgFormRepository, PgModuleRepository, PgPaymentRepository, PgPermissionRepository,
    PgPersonRepository, PgRolFormPermissionRepository, PgRolPermissionRepository,
    PgRolRepository, PgUserActivityRepository, PgUserRepository, PgUserRolRepository,
};

pub type ActivityService = CrudService<Activity, PgActivityRepository>;
pub type DestinationService = CrudService<Destination, PgDestinationRepository>;
pub type FormService = CrudService<Form, PgFormRepository>;
pub type ModuleService = CrudService<Module, PgModuleRepository>;
pub type PaymentService = CrudService<Payment, PgPaymentRepository>;
pub type PermissionService = CrudService<Permission, PgPermissionRepository>;
pub type PersonService = CrudService<Person, PgPersonRepository>;
pub type RolService = CrudService<Rol, PgRolRepository>;
pub type UserService = CrudService<User, PgUserRepository>;
pub type ChangeLogService = CrudService<ChangeLog, PgChangeLogRepository>;
pub type UserRolService = CrudService<UserRol, PgUserRolRepository>;
pub type RolPermissionService = CrudService<RolPermission, PgRolPermissionRepository>;
pub type RolFormPermissionService = CrudService<RolFormPermission, PgRolFormPermissionRepository>;
pub type UserActivityService = CrudService<UserActivity, PgUserActivityRepository>;
pub type FormModuleService = CrudService<FormModule, PgFormModuleRepository>;

/// One service per entity plus the pool used by the health probe.
///
/// Handlers pull the piece they need through `FromRef`, so each field must
/// have a distinct type.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub activity_service: Arc<ActivityService>,
    pub destination_service: Arc<DestinationService>,
    pub form_service: Arc<FormService>,
    pub module_service: Arc<ModuleService>,
    pub payment_service: Arc<PaymentService>,
    pub permission_service: Arc<PermissionService>,
    pub person_service: Arc<PersonService>,
    pub rol_service: Arc<RolService>,
    pub user_service: Arc<UserService>,
    pub change_log_service: Arc<ChangeLogService>,
    pub user_rol_service: Arc<UserRolService>,
    pub rol_permission_service: Arc<RolPermissionService>,
    pub rol_form_permission_service: Arc<RolFormPermissionService>,
    pub user_activity_service: Arc<UserActivityService>,
    pub form_module_service: Arc<FormModuleService>,
}

impl AppState {
    /// Wires every PostgreSQL repository and its service onto `pool`.
    pub fn new(pool: Arc<PgPool>) -> Self {
        fn service<E, R>(repository: R) -> Arc<CrudService<E, R>>
        where
            E: Resource,
            R: CrudRepository<Entity = E>,
        {
            Arc::new(CrudService::new(Arc::new(repository)))
        }

        Self {
            activity_service: service(PgActivityRepository::new(pool.clone())),
            destination_service: service(PgDestinationRepository::new(pool.clone())),
            form_service: service(PgFormRepository::new(pool.clone())),
            module_service: service(PgModuleRepository::new(pool.clone())),
            payment_service: service(PgPaymentRepository::new(pool.clone())),
            permission_service: service(PgPermissionRepository::new(pool.clone())),
            person_service: service(PgPersonRepository::new(pool.clone())),
            rol_service: service(PgRolRepository::new(pool.clone())),
            user_service: service(PgUserRepository::new(pool.clone())),
            change_log_service: service(PgChangeLogRepository::new(pool.clone())),
            user_rol_service: service(PgUserRolRepository::new(pool.clone())),
            rol_permission_service: service(PgRolPermissionRepository::new(pool.clone())),
            rol_form_permission_service: service(PgRolFormPermissionRepository::new(
                pool.clone(),
            )),
            user_activity_service: service(PgUserActivityRepository::new(pool.clone())),
            form_module_service: service(PgFormModuleRepository::new(pool.clone())),
            pool,
        }
    }
}
