//! PostgreSQL implementation of the payment repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::lifecycle::delete_row;
use crate::domain::entities::{NewPayment, Payment, PaymentPatch};
use crate::domain::repositories::{CrudRepository, RepositoryResult};

const TABLE: &str = "payments";
const KEY: &str = "payment_id";

/// PostgreSQL repository for payments.
///
/// Payments are never soft-deleted; `payment_date` is set by the database.
pub struct PgPaymentRepository {
    pool: Arc<PgPool>,
}

impl PgPaymentRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgPaymentRepository {
    type Entity = Payment;

    async fn find_all(&self) -> RepositoryResult<Vec<Payment>> {
        let rows = sqlx::query_as::<_, Payment>(
            r#"
            SELECT payment_id, payment_method, amount, activity, payment_date
            FROM payments
            ORDER BY payment_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Payment>> {
        let row = sqlx::query_as::<_, Payment>(
            r#"
            SELECT payment_id, payment_method, amount, activity, payment_date
            FROM payments
            WHERE payment_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, draft: NewPayment) -> RepositoryResult<Payment> {
        let row = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (payment_method, amount, activity)
            VALUES ($1, $2, $3)
            RETURNING payment_id, payment_method, amount, activity, payment_date
            "#,
        )
        .bind(draft.payment_method)
        .bind(draft.amount)
        .bind(draft.activity)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i32, draft: NewPayment) -> RepositoryResult<Option<Payment>> {
        let row = sqlx::query_as::<_, Payment>(
            r#"
            UPDATE payments SET
                payment_method = $2,
                amount         = $3,
                activity       = $4
            WHERE payment_id = $1
            RETURNING payment_id, payment_method, amount, activity, payment_date
            "#,
        )
        .bind(id)
        .bind(draft.payment_method)
        .bind(draft.amount)
        .bind(draft.activity)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn patch(&self, id: i32, patch: PaymentPatch) -> RepositoryResult<Option<Payment>> {
        let row = sqlx::query_as::<_, Payment>(
            r#"
            UPDATE payments SET
                payment_method = COALESCE($2::TEXT, payment_method),
                amount         = COALESCE($3::NUMERIC, amount),
                activity       = COALESCE($4::TEXT, activity)
            WHERE payment_id = $1
            RETURNING payment_id, payment_method, amount, activity, payment_date
            "#,
        )
        .bind(id)
        .bind(patch.payment_method)
        .bind(patch.amount)
        .bind(patch.activity)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        delete_row(&self.pool, TABLE, KEY, id).await
    }
}
