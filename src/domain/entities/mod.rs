//! Core domain entities.
//!
//! Every entity comes in three shapes:
//! - the stored row (`Rol`, `User`, ...), mapped with `sqlx::FromRow`
//! - a draft (`NewRol`, ...) used for inserts and full overwrites
//! - a patch (`RolPatch`, ...) used for partial updates, where `None`
//!   means "leave unchanged" and `Some(None)` clears a nullable column
//!
//! Join entities (`UserRol`, `RolPermission`, ...) are flat rows of foreign
//! keys with their own lifecycle columns.

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

pub use activity::{Activity, ActivityPatch, NewActivity};
pub use change_log::{ChangeLog, ChangeLogPatch, NewChangeLog};
pub use destination::{Destination, DestinationPatch, NewDestination};
pub use form::{Form, FormPatch, NewForm};
pub use form_module::{FormModule, FormModulePatch, NewFormModule};
pub use module::{Module, ModulePatch, NewModule};
pub use payment::{NewPayment, Payment, PaymentPatch};
pub use permission::{NewPermission, Permission, PermissionPatch};
pub use person::{NewPerson, Person, PersonPatch};
pub use rol::{NewRol, Rol, RolPatch};
pub use rol_form_permission::{NewRolFormPermission, RolFormPermission, RolFormPermissionPatch};
pub use rol_permission::{NewRolPermission, RolPermission, RolPermissionPatch};
pub use user::{NewUser, User, UserPatch};
pub use user_activity::{NewUserActivity, UserActivity, UserActivityPatch};
pub use user_rol::{NewUserRol, UserRol, UserRolPatch};

/// A persisted record type together with its write shapes.
pub trait Entity: Send + Sync + 'static {
    /// Name used in routes, log fields and response messages.
    const LABEL: &'static str;

    /// Values required to insert a row or overwrite every mutable column.
    type Draft: Send + 'static;

    /// Field-level changes applied by a partial update.
    type Patch: Send + 'static;
}
