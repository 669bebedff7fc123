//! Travel destination entity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::Entity;

/// A place travellers can visit. Coordinates are optional.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Destination {
    pub destination_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub create_at: DateTime<Utc>,
    pub delete_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDestination {
    pub name: String,
    pub description: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

/// Partial update for a destination.
///
/// Coordinates use the double-option form so a client can clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DestinationPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub country: Option<Option<String>>,
    pub region: Option<Option<String>>,
    pub latitude: Option<Option<Decimal>>,
    pub longitude: Option<Option<Decimal>>,
}

impl Entity for Destination {
    const LABEL: &'static str = "Destination";
    type Draft = NewDestination;
    type Patch = DestinationPatch;
}
