//! Association between users and roles.

use chrono::{DateTime, Utc};

use super::Entity;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UserRol {
    pub user_rol_id: i32,
    pub user_id: i32,
    pub rol_id: i32,
    pub create_at: DateTime<Utc>,
    pub delete_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUserRol {
    pub user_id: i32,
    pub rol_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserRolPatch {
    pub user_id: Option<i32>,
    pub rol_id: Option<i32>,
}

impl Entity for UserRol {
    const LABEL: &'static str = "UserRol";
    type Draft = NewUserRol;
    type Patch = UserRolPatch;
}
