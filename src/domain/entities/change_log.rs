//! Change log entry entity.

use chrono::{DateTime, Utc};

use super::Entity;

/// A free-text note describing a change to the system.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ChangeLog {
    pub change_log_id: i32,
    pub description: String,
    pub change_date: DateTime<Utc>,
}

/// `change_date` defaults to the insertion time when `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChangeLog {
    pub description: String,
    pub change_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeLogPatch {
    pub description: Option<String>,
    pub change_date: Option<DateTime<Utc>>,
}

impl Entity for ChangeLog {
    const LABEL: &'static str = "ChangeLog";
    type Draft = NewChangeLog;
    type Patch = ChangeLogPatch;
}
