//! Role entity.

use chrono::{DateTime, Utc};

use super::Entity;

/// A named role that groups permissions and is granted to users.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Rol {
    pub rol_id: i32,
    pub rol_name: String,
    pub description: Option<String>,
    pub create_at: DateTime<Utc>,
    pub delete_at: Option<DateTime<Utc>>,
}

/// Input data for creating a role or overwriting all of its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRol {
    pub rol_name: String,
    pub description: Option<String>,
}

/// Partial update for a role.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RolPatch {
    pub rol_name: Option<String>,
    pub description: Option<Option<String>>,
}

impl Entity for Rol {
    const LABEL: &'static str = "Rol";
    type Draft = NewRol;
    type Patch = RolPatch;
}
