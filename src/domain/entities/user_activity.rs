//! Association between users and the activities they booked.

use chrono::{DateTime, Utc};

use super::Entity;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UserActivity {
    pub user_activity_id: i32,
    pub user_id: i32,
    pub activity_id: i32,
    pub create_at: DateTime<Utc>,
    pub delete_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUserActivity {
    pub user_id: i32,
    pub activity_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserActivityPatch {
    pub user_id: Option<i32>,
    pub activity_id: Option<i32>,
}

impl Entity for UserActivity {
    const LABEL: &'static str = "UserActivity";
    type Draft = NewUserActivity;
    type Patch = UserActivityPatch;
}
