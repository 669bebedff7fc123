//! PostgreSQL implementation of the module repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::lifecycle::{delete_row, restore_row, soft_delete_row};
use crate::domain::entities::{Module, ModulePatch, NewModule};
use crate::domain::repositories::{CrudRepository, RepositoryResult, SoftDeleteRepository};

const TABLE: &str = "modules";
const KEY: &str = "module_id";

pub struct PgModuleRepository {
    pool: Arc<PgPool>,
}

impl PgModuleRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgModuleRepository {
    type Entity = Module;

    async fn find_all(&self) -> RepositoryResult<Vec<Module>> {
        let rows = sqlx::query_as::<_, Module>(
            r#"
            SELECT module_id, code, name, active, create_at, delete_at
            FROM modules
            ORDER BY module_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Module>> {
        let row = sqlx::query_as::<_, Module>(
            r#"
            SELECT module_id, code, name, active, create_at, delete_at
            FROM modules
            WHERE module_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, draft: NewModule) -> RepositoryResult<Module> {
        let row = sqlx::query_as::<_, Module>(
            r#"
            INSERT INTO modules (code, name, active)
            VALUES ($1, $2, $3)
            RETURNING module_id, code, name, active, create_at, delete_at
            "#,
        )
        .bind(draft.code)
        .bind(draft.name)
        .bind(draft.active)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i32, draft: NewModule) -> RepositoryResult<Option<Module>> {
        let row = sqlx::query_as::<_, Module>(
            r#"
            UPDATE modules SET
                code   = $2,
                name   = $3,
                active = $4
            WHERE module_id = $1
            RETURNING module_id, code, name, active, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(draft.code)
        .bind(draft.name)
        .bind(draft.active)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn patch(&self, id: i32, patch: ModulePatch) -> RepositoryResult<Option<Module>> {
        let row = sqlx::query_as::<_, Module>(
            r#"
            UPDATE modules SET
                code   = COALESCE($2::INTEGER, code),
                name   = COALESCE($3::TEXT, name),
                active = COALESCE($4::BOOLEAN, active)
            WHERE module_id = $1
            RETURNING module_id, code, name, active, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(patch.code)
        .bind(patch.name)
        .bind(patch.active)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        delete_row(&self.pool, TABLE, KEY, id).await
    }
}

#[async_trait]
impl SoftDeleteRepository for PgModuleRepository {
    async fn find_all_active(&self) -> RepositoryResult<Vec<Module>> {
        let rows = sqlx::query_as::<_, Module>(
            r#"
            SELECT module_id, code, name, active, create_at, delete_at
            FROM modules
            WHERE delete_at IS NULL
            ORDER BY module_id
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
