//! Payment entity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::Entity;

/// A payment made for an activity.
///
/// Payments have no soft-delete columns; `payment_date` is assigned by the
/// database when the row is inserted.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Payment {
    pub payment_id: i32,
    pub payment_method: String,
    pub amount: Decimal,
    pub activity: String,
    pub payment_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub payment_method: String,
    pub amount: Decimal,
    pub activity: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentPatch {
    pub payment_method: Option<String>,
    pub amount: Option<Decimal>,
    pub activity: Option<String>,
}

impl Entity for Payment {
    const LABEL: &'static str = "Payment";
    type Draft = NewPayment;
    type Patch = PaymentPatch;
}
