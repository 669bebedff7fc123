//! PostgreSQL implementation of the change log repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::lifecycle::delete_row;
use crate::domain::entities::{ChangeLog, ChangeLogPatch, NewChangeLog};
use crate::domain::repositories::{CrudRepository, RepositoryResult};

const TABLE: &str = "change_logs";
const KEY: &str = "change_log_id";

pub struct PgChangeLogRepository {
    pool: Arc<PgPool>,
}

impl PgChangeLogRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgChangeLogRepository {
    type Entity = ChangeLog;

    async fn find_all(&self) -> RepositoryResult<Vec<ChangeLog>> {
        let rows = sqlx::query_as::<_, ChangeLog>(
            r#"
            SELECT change_log_id, description, change_date
            FROM change_logs
            ORDER BY change_log_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<ChangeLog>> {
        let row = sqlx::query_as::<_, ChangeLog>(
            r#"
            SELECT change_log_id, description, change_date
            FROM change_logs
            WHERE change_log_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, draft: NewChangeLog) -> RepositoryResult<ChangeLog> {
        let row = sqlx::query_as::<_, ChangeLog>(
            r#"
            INSERT INTO change_logs (description, change_date)
            VALUES ($1, COALESCE($2::TIMESTAMPTZ, NOW()))
            RETURNING change_log_id, description, change_date
            "#,
        )
        .bind(draft.description)
        .bind(draft.change_date)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i32, draft: NewChangeLog) -> RepositoryResult<Option<ChangeLog>> {
        let row = sqlx::query_as::<_, ChangeLog>(
            r#"
            UPDATE change_logs SET
                description = $2,
                change_date = COALESCE($3::TIMESTAMPTZ, NOW())
            WHERE change_log_id = $1
            RETURNING change_log_id, description, change_date
            "#,
        )
        .bind(id)
        .bind(draft.description)
        .bind(draft.change_date)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn patch(&self, id: i32, patch: ChangeLogPatch) -> RepositoryResult<Option<ChangeLog>> {
        let row = sqlx::query_as::<_, ChangeLog>(
            r#"
            UPDATE change_logs SET
                description = COALESCE($2::TEXT, description),
                change_date = COALESCE($3::TIMESTAMPTZ, change_date)
            WHERE change_log_id = $1
            RETURNING change_log_id, description, change_date
            "#,
        )
        .bind(id)
        .bind(patch.description)
        .bind(patch.change_date)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        delete_row(&self.pool, TABLE, KEY, id).await
    }
}
