//! PostgreSQL implementation of the form repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::lifecycle::{delete_row, restore_row, soft_delete_row};
use crate::domain::entities::{Form, FormPatch, NewForm};
use crate::domain::repositories::{CrudRepository, RepositoryResult, SoftDeleteRepository};

const TABLE: &str = "forms";
const KEY: &str = "form_id";

pub struct PgFormRepository {
    pool: Arc<PgPool>,
}

impl PgFormRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgFormRepository {
    type Entity = Form;

    async fn find_all(&self) -> RepositoryResult<Vec<Form>> {
        let rows = sqlx::query_as::<_, Form>(
            "SELECT form_id, name, create_at, delete_at FROM forms ORDER BY form_id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Form>> {
        let row = sqlx::query_as::<_, Form>(
            "SELECT form_id, name, create_at, delete_at FROM forms WHERE form_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, draft: NewForm) -> RepositoryResult<Form> {
        let row = sqlx::query_as::<_, Form>(
            r#"
            INSERT INTO forms (name)
            VALUES ($1)
            RETURNING form_id, name, create_at, delete_at
            "#,
        )
        .bind(draft.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i32, draft: NewForm) -> RepositoryResult<Option<Form>> {
        let row = sqlx::query_as::<_, Form>(
            r#"
            UPDATE forms SET name = $2
            WHERE form_id = $1
            RETURNING form_id, name, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(draft.name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn patch(&self, id: i32, patch: FormPatch) -> RepositoryResult<Option<Form>> {
        let row = sqlx::query_as::<_, Form>(
            r#"
            UPDATE forms SET name = COALESCE($2::TEXT, name)
            WHERE form_id = $1
            RETURNING form_id, name, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        delete_row(&self.pool, TABLE, KEY, id).await
    }
}

#[async_trait]
impl SoftDeleteRepository for PgFormRepository {
    async fn find_all_active(&self) -> RepositoryResult<Vec<Form>> {
        let rows = sqlx::query_as::<_, Form>(
            r#"
            SELECT form_id, name, create_at, delete_at
            FROM forms
            WHERE delete_at IS NULL
            ORDER BY form_id
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
