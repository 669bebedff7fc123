//! PostgreSQL repository implementations.
//!
//! One repository per table, all built on runtime-checked `sqlx::query_as`
//! queries mapped through `sqlx::FromRow`.
//!
//! # Repositories
//!
//! - Catalog: [`PgActivityRepository`], [`PgDestinationRepository`], [`PgPaymentRepository`]
//! - Accounts: [`PgUserRepository`], [`PgPersonRepository`], [`PgRolRepository`],
//!   [`PgPermissionRepository`]
//! - Back office: [`PgFormRepository`], [`PgModuleRepository`], [`PgChangeLogRepository`]
//! - Associations: [`PgUserRolRepository`], [`PgRolPermissionRepository`],
//!   [`PgRolFormPermissionRepository`], [`PgUserActivityRepository`],
//!   [`PgFormModuleRepository`]

pub mod lifecycle;
pub mod pg_activity_repository;
pub mod pg_change_log_repository;
pub mod pg_destination_repository;
pub mod pg_form_module_repository;
pub mod pg_form_repository;
pub mod pg_module_repository;
pub mod pg_payment_repository;
pub mod pg_permission_repository;
pub mod pg_person_repository;
pub mod pg_rol_form_permission_repository;
pub mod pg_rol_permission_repository;
pub mod pg_rol_repository;
pub mod pg_user_activity_repository;
pub mod pg_user_repository;
pub mod pg_user_rol_repository;

pub use pg_activity_repository::PgActivityRepository;
pub use pg_change_log_repository::PgChangeLogRepository;
pub use pg_destination_repository::PgDestinationRepository;
pub use pg_form_module_repository::PgFormModuleRepository;
pub use pg_form_repository::PgFormRepository;
pub use pg_module_repository::PgModuleRepository;
pub use pg_payment_repository::PgPaymentRepository;
pub use pg_permission_repository::PgPermissionRepository;
pub use pg_person_repository::PgPersonRepository;
pub use pg_rol_form_permission_repository::PgRolFormPermissionRepository;
pub use pg_rol_permission_repository::PgRolPermissionRepository;
pub use pg_rol_repository::PgRolRepository;
pub use pg_user_activity_repository::PgUserActivityRepository;
pub use pg_user_repository::PgUserRepository;
pub use pg_user_rol_repository::PgUserRolRepository;

/// Tables with a `delete_at` column, in dependency order.
pub const SOFT_DELETE_TABLES: &[&str] = &[
    "activities",
    "destinations",
    "forms",
    "modules",
    "permissions",
    "rols",
    "users",
    "user_rols",
    "rol_permissions",
    "rol_form_permissions",
    "user_activities",
    "form_modules",
];

/// Tables without soft delete.
pub const PLAIN_TABLES: &[&str] = &["payments", "persons", "change_logs"];
