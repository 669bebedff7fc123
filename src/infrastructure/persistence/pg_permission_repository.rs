//! PostgreSQL implementation of the permission repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::lifecycle::{delete_row, restore_row, soft_delete_row};
use crate::domain::entities::{NewPermission, Permission, PermissionPatch};
use crate::domain::repositories::{CrudRepository, RepositoryResult, SoftDeleteRepository};

const TABLE: &str = "permissions";
const KEY: &str = "permission_id";

pub struct PgPermissionRepository {
    pool: Arc<PgPool>,
}

impl PgPermissionRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgPermissionRepository {
    type Entity = Permission;

    async fn find_all(&self) -> RepositoryResult<Vec<Permission>> {
        let rows = sqlx::query_as::<_, Permission>(
            r#"
            SELECT permission_id, permission_name, description, create_at, delete_at
            FROM permissions
            ORDER BY permission_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Permission>> {
        let row = sqlx::query_as::<_, Permission>(
            r#"
            SELECT permission_id, permission_name, description, create_at, delete_at
            FROM permissions
            WHERE permission_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, draft: NewPermission) -> RepositoryResult<Permission> {
        let row = sqlx::query_as::<_, Permission>(
            r#"
            INSERT INTO permissions (permission_name, description)
            VALUES ($1, $2)
            RETURNING permission_id, permission_name, description, create_at, delete_at
            "#,
        )
        .bind(draft.permission_name)
        .bind(draft.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(
        &self,
        id: i32,
        draft: NewPermission,
    ) -> RepositoryResult<Option<Permission>> {
        let row = sqlx::query_as::<_, Permission>(
            r#"
            UPDATE permissions SET
                permission_name = $2,
                description     = $3
            WHERE permission_id = $1
            RETURNING permission_id, permission_name, description, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(draft.permission_name)
        .bind(draft.description)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn patch(
        &self,
        id: i32,
        patch: PermissionPatch,
    ) -> RepositoryResult<Option<Permission>> {
        let set_description = patch.description.is_some();

        let row = sqlx::query_as::<_, Permission>(
            r#"
            UPDATE permissions SET
                permission_name = COALESCE($2::TEXT, permission_name),
                description     = CASE WHEN $3 THEN $4::TEXT ELSE description END
            WHERE permission_id = $1
            RETURNING permission_id, permission_name, description, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(patch.permission_name)
        .bind(set_description)
        .bind(patch.description.flatten())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        delete_row(&self.pool, TABLE, KEY, id).await
    }
}

#[async_trait]
impl SoftDeleteRepository for PgPermissionRepository {
    async fn find_all_active(&self) -> RepositoryResult<Vec<Permission>> {
        let rows = sqlx::query_as::<_, Permission>(
            r#"
            SELECT permission_id, permission_name, description, create_at, delete_at
            FROM permissions
            WHERE delete_at IS NULL
            ORDER BY permission_id
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
