//! Form entity (a screen of the back office that permissions apply to).

use chrono::{DateTime, Utc};

use super::Entity;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Form {
    pub form_id: i32,
    pub name: String,
    pub create_at: DateTime<Utc>,
    pub delete_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewForm {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPatch {
    pub name: Option<String>,
}

impl Entity for Form {
    const LABEL: &'static str = "Form";
    type Draft = NewForm;
    type Patch = FormPatch;
}
