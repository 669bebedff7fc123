//! PostgreSQL implementation of the form-module membership repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::lifecycle::{delete_row, restore_row, soft_delete_row};
use crate::domain::entities::{NewFormModule, FormModule, FormModulePatch};
use crate::domain::repositories::{CrudRepository, RepositoryResult, SoftDeleteRepository};

const TABLE: &str = "form_modules";
const KEY: &str = "form_module_id";

pub struct PgFormModuleRepository {
    pool: Arc<PgPool>,
}

impl PgFormModuleRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgFormModuleRepository {
    type Entity = FormModule;

    async fn find_all(&self) -> RepositoryResult<Vec<FormModule>> {
        let rows = sqlx::query_as::<_, FormModule>(
            r#"
            SELECT form_module_id, form_id, module_id, create_at, delete_at
            FROM form_modules
            ORDER BY form_module_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<FormModule>> {
        let row = sqlx::query_as::<_, FormModule>(
            r#"
            SELECT form_module_id, form_id, module_id, create_at, delete_at
            FROM form_modules
            WHERE form_module_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, draft: NewFormModule) -> RepositoryResult<FormModule> {
        let row = sqlx::query_as::<_, FormModule>(
            r#"
            INSERT INTO form_modules (form_id, module_id)
            VALUES ($1, $2)
            RETURNING form_module_id, form_id, module_id, create_at, delete_at
            "#,
        )
        .bind(draft.form_id)
        .bind(draft.module_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i32, draft: NewFormModule) -> RepositoryResult<Option<FormModule>> {
        let row = sqlx::query_as::<_, FormModule>(
            r#"
            UPDATE form_modules SET
                form_id = $2,
                module_id = $3
            WHERE form_module_id = $1
            RETURNING form_module_id, form_id, module_id, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(draft.form_id)
        .bind(draft.module_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn patch(&self, id: i32, patch: FormModulePatch) -> RepositoryResult<Option<FormModule>> {
        let row = sqlx::query_as::<_, FormModule>(
            r#"
            UPDATE form_modules SET
                form_id = COALESCE($2::INTEGER, form_id),
                module_id = COALESCE($3::INTEGER, module_id)
            WHERE form_module_id = $1
            RETURNING form_module_id, form_id, module_id, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(patch.form_id)
        .bind(patch.module_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        delete_row(&self.pool, TABLE, KEY, id).await
    }
}

#[async_trait]
impl SoftDeleteRepository for PgFormModuleRepository {
    async fn find_all_active(&self) -> RepositoryResult<Vec<FormModule>> {
        let rows = sqlx::query_as::<_, FormModule>(
            r#"
            SELECT form_module_id, form_id, module_id, create_at, delete_at
            FROM form_modules
            WHERE delete_at IS NULL
            ORDER BY form_module_id
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
