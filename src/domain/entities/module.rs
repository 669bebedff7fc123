//! Module entity: a group of forms identified by a numeric code.

use chrono::{DateTime, Utc};

use super::Entity;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Module {
    pub module_id: i32,
    pub code: i32,
    pub name: String,
    pub active: bool,
    pub create_at: DateTime<Utc>,
    pub delete_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewModule {
    pub code: i32,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModulePatch {
    pub code: Option<i32>,
    pub name: Option<String>,
    pub active: Option<bool>,
}

impl Entity for Module {
    const LABEL: &'static str = "Module";
    type Draft = NewModule;
    type Patch = ModulePatch;
}
