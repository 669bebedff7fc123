//! Association between forms and the modules that contain them.

use chrono::{DateTime, Utc};

use super::Entity;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct FormModule {
    pub form_module_id: i32,
    pub form_id: i32,
    pub module_id: i32,
    pub create_at: DateTime<Utc>,
    pub delete_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFormModule {
    pub form_id: i32,
    pub module_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormModulePatch {
    pub form_id: Option<i32>,
    pub module_id: Option<i32>,
}

impl Entity for FormModule {
    const LABEL: &'static str = "FormModule";
    type Draft = NewFormModule;
    type Patch = FormModulePatch;
}
