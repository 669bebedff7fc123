//! Grants a permission on a specific form to a role.

use chrono::{DateTime, Utc};

use super::Entity;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RolFormPermission {
    pub rol_form_permission_id: i32,
    pub rol_id: i32,
    pub form_id: i32,
    pub permission_id: i32,
    pub create_at: DateTime<Utc>,
    pub delete_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRolFormPermission {
    pub rol_id: i32,
    pub form_id: i32,
    pub permission_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RolFormPermissionPatch {
    pub rol_id: Option<i32>,
    pub form_id: Option<i32>,
    pub permission_id: Option<i32>,
}

impl Entity for RolFormPermission {
    const LABEL: &'static str = "RolFormPermission";
    type Draft = NewRolFormPermission;
    type Patch = RolFormPermissionPatch;
}
