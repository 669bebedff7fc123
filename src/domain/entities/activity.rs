//! Bookable activity entity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::Entity;

/// An activity offered to travellers, priced per booking.
///
/// `duration_hours` is a decimal number of hours (e.g. `1.5`).
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Activity {
    pub activity_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Decimal,
    pub duration_hours: Decimal,
    pub create_at: DateTime<Utc>,
    pub delete_at: Option<DateTime<Utc>>,
}

/// Input data for creating an activity or overwriting all of its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivity {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Decimal,
    pub duration_hours: Decimal,
}

/// Partial update for an activity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub price: Option<Decimal>,
    pub duration_hours: Option<Decimal>,
}

impl Entity for Activity {
    const LABEL: &'static str = "Activity";
    type Draft = NewActivity;
    type Patch = ActivityPatch;
}
