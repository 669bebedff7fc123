//! PostgreSQL implementation of the activity repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::lifecycle::{delete_row, restore_row, soft_delete_row};
use crate::domain::entities::{Activity, ActivityPatch, NewActivity};
use crate::domain::repositories::{CrudRepository, RepositoryResult, SoftDeleteRepository};

const TABLE: &str = "activities";
const KEY: &str = "activity_id";

/// PostgreSQL repository for bookable activities.
pub struct PgActivityRepository {
    pool: Arc<PgPool>,
}

impl PgActivityRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgActivityRepository {
    type Entity = Activity;

    async fn find_all(&self) -> RepositoryResult<Vec<Activity>> {
        let rows = sqlx::query_as::<_, Activity>(
            r#"
            SELECT activity_id, name, description, category, price, duration_hours, create_at, delete_at
            FROM activities
            ORDER BY activity_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Activity>> {
        let row = sqlx::query_as::<_, Activity>(
            r#"
            SELECT activity_id, name, description, category, price, duration_hours, create_at, delete_at
            FROM activities
            WHERE activity_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, draft: NewActivity) -> RepositoryResult<Activity> {
        let row = sqlx::query_as::<_, Activity>(
            r#"
            INSERT INTO activities (name, description, category, price, duration_hours)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING activity_id, name, description, category, price, duration_hours, create_at, delete_at
            "#,
        )
        .bind(draft.name)
        .bind(draft.description)
        .bind(draft.category)
        .bind(draft.price)
        .bind(draft.duration_hours)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i32, draft: NewActivity) -> RepositoryResult<Option<Activity>> {
        let row = sqlx::query_as::<_, Activity>(
            r#"
            UPDATE activities SET
                name           = $2,
                description    = $3,
                category       = $4,
                price          = $5,
                duration_hours = $6
            WHERE activity_id = $1
            RETURNING activity_id, name, description, category, price, duration_hours, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(draft.name)
        .bind(draft.description)
        .bind(draft.category)
        .bind(draft.price)
        .bind(draft.duration_hours)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn patch(&self, id: i32, patch: ActivityPatch) -> RepositoryResult<Option<Activity>> {
        let set_description = patch.description.is_some();
        let set_category = patch.category.is_some();

        let row = sqlx::query_as::<_, Activity>(
            r#"
            UPDATE activities SET
                name           = COALESCE($2::TEXT, name),
                description    = CASE WHEN $3 THEN $4::TEXT ELSE description END,
                category       = CASE WHEN $5 THEN $6::TEXT ELSE category END,
                price          = COALESCE($7::NUMERIC, price),
                duration_hours = COALESCE($8::NUMERIC, duration_hours)
            WHERE activity_id = $1
            RETURNING activity_id, name, description, category, price, duration_hours, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(set_description)
        .bind(patch.description.flatten())
        .bind(set_category)
        .bind(patch.category.flatten())
        .bind(patch.price)
        .bind(patch.duration_hours)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        delete_row(&self.pool, TABLE, KEY, id).await
    }
}

#[async_trait]
impl SoftDeleteRepository for PgActivityRepository {
    async fn find_all_active(&self) -> RepositoryResult<Vec<Activity>> {
        let rows = sqlx::query_as::<_, Activity>(
            r#"
            SELECT activity_id, name, description, category, price, duration_hours, create_at, delete_at
            FROM activities
            WHERE delete_at IS NULL
            ORDER BY activity_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn soft_delete(&self, id: i32) -> RepositoryResult<bool> {
        soft_delete_row(&self.pool, TABLE, KEY, id).await
    }

    async fn restore(&self, id: i32) -> RepositoryResult<bool> {
        restore_row(&self.pool, TABLE, KEY, id).await
    }
}
