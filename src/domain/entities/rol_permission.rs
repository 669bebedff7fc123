//! Association between roles and permissions.

use chrono::{DateTime, Utc};

use super::Entity;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RolPermission {
    pub rol_permission_id: i32,
    pub rol_id: i32,
    pub permission_id: i32,
    pub create_at: DateTime<Utc>,
    pub delete_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRolPermission {
    pub rol_id: i32,
    pub permission_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RolPermissionPatch {
    pub rol_id: Option<i32>,
    pub permission_id: Option<i32>,
}

impl Entity for RolPermission {
    const LABEL: &'static str = "RolPermission";
    type Draft = NewRolPermission;
    type Patch = RolPermissionPatch;
}
