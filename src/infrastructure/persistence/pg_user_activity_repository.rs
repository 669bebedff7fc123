//! PostgreSQL implementation of the user-activity booking repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::lifecycle::{delete_row, restore_row, soft_delete_row};
use crate::domain::entities::{NewUserActivity, UserActivity, UserActivityPatch};
use crate::domain::repositories::{CrudRepository, RepositoryResult, SoftDeleteRepository};

const TABLE: &str = "user_activities";
const KEY: &str = "user_activity_id";

pub struct PgUserActivityRepository {
    pool: Arc<PgPool>,
}

impl PgUserActivityRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgUserActivityRepository {
    type Entity = UserActivity;

    async fn find_all(&self) -> RepositoryResult<Vec<UserActivity>> {
        let rows = sqlx::query_as::<_, UserActivity>(
            r#"
            SELECT user_activity_id, user_id, activity_id, create_at, delete_at
            FROM user_activities
            ORDER BY user_activity_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<UserActivity>> {
        let row = sqlx::query_as::<_, UserActivity>(
            r#"
            SELECT user_activity_id, user_id, activity_id, create_at, delete_at
            FROM user_activities
            WHERE user_activity_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, draft: NewUserActivity) -> RepositoryResult<UserActivity> {
        let row = sqlx::query_as::<_, UserActivity>(
            r#"
            INSERT INTO user_activities (user_id, activity_id)
            VALUES ($1, $2)
            RETURNING user_activity_id, user_id, activity_id, create_at, delete_at
            "#,
        )
        .bind(draft.user_id)
        .bind(draft.activity_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i32, draft: NewUserActivity) -> RepositoryResult<Option<UserActivity>> {
        let row = sqlx::query_as::<_, UserActivity>(
            r#"
            UPDATE user_activities SET
                user_id = $2,
                activity_id = $3
            WHERE user_activity_id = $1
            RETURNING user_activity_id, user_id, activity_id, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(draft.user_id)
        .bind(draft.activity_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn patch(&self, id: i32, patch: UserActivityPatch) -> RepositoryResult<Option<UserActivity>> {
        let row = sqlx::query_as::<_, UserActivity>(
            r#"
            UPDATE user_activities SET
                user_id = COALESCE($2::INTEGER, user_id),
                activity_id = COALESCE($3::INTEGER, activity_id)
            WHERE user_activity_id = $1
            RETURNING user_activity_id, user_id, activity_id, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(patch.user_id)
        .bind(patch.activity_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        delete_row(&self.pool, TABLE, KEY, id).await
    }
}

#[async_trait]
impl SoftDeleteRepository for PgUserActivityRepository {
    async fn find_all_active(&self) -> RepositoryResult<Vec<UserActivity>> {
        let rows = sqlx::query_as::<_, UserActivity>(
            r#"
            SELECT user_activity_id, user_id, activity_id, create_at, delete_at
            FROM user_activities
            WHERE delete_at IS NULL
            ORDER BY user_activity_id
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
