//! Permission entity.

use chrono::{DateTime, Utc};

use super::Entity;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Permission {
    pub permission_id: i32,
    pub permission_name: String,
    pub description: Option<String>,
    pub create_at: DateTime<Utc>,
    pub delete_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPermission {
    pub permission_name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PermissionPatch {
    pub permission_name: Option<String>,
    pub description: Option<Option<String>>,
}

impl Entity for Permission {
    const LABEL: &'static str = "Permission";
    type Draft = NewPermission;
    type Patch = PermissionPatch;
}
