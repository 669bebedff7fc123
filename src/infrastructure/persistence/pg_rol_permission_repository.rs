//! PostgreSQL implementation of the role-permission grant repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::lifecycle::{delete_row, restore_row, soft_delete_row};
use crate::domain::entities::{NewRolPermission, RolPermission, RolPermissionPatch};
use crate::domain::repositories::{CrudRepository, RepositoryResult, SoftDeleteRepository};

const TABLE: &str = "rol_permissions";
const KEY: &str = "rol_permission_id";

pub struct PgRolPermissionRepository {
    pool: Arc<PgPool>,
}

impl PgRolPermissionRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgRolPermissionRepository {
    type Entity = RolPermission;

    async fn find_all(&self) -> RepositoryResult<Vec<RolPermission>> {
        let rows = sqlx::query_as::<_, RolPermission>(
            r#"
            SELECT rol_permission_id, rol_id, permission_id, create_at, delete_at
            FROM rol_permissions
            ORDER BY rol_permission_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<RolPermission>> {
        let row = sqlx::query_as::<_, RolPermission>(
            r#"
            SELECT rol_permission_id, rol_id, permission_id, create_at, delete_at
            FROM rol_permissions
            WHERE rol_permission_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, draft: NewRolPermission) -> RepositoryResult<RolPermission> {
        let row = sqlx::query_as::<_, RolPermission>(
            r#"
            INSERT INTO rol_permissions (rol_id, permission_id)
            VALUES ($1, $2)
            RETURNING rol_permission_id, rol_id, permission_id, create_at, delete_at
            "#,
        )
        .bind(draft.rol_id)
        .bind(draft.permission_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i32, draft: NewRolPermission) -> RepositoryResult<Option<RolPermission>> {
        let row = sqlx::query_as::<_, RolPermission>(
            r#"
            UPDATE rol_permissions SET
                rol_id = $2,
                permission_id = $3
            WHERE rol_permission_id = $1
            RETURNING rol_permission_id, rol_id, permission_id, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(draft.rol_id)
        .bind(draft.permission_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn patch(&self, id: i32, patch: RolPermissionPatch) -> RepositoryResult<Option<RolPermission>> {
        let row = sqlx::query_as::<_, RolPermission>(
            r#"
            UPDATE rol_permissions SET
                rol_id = COALESCE($2::INTEGER, rol_id),
                permission_id = COALESCE($3::INTEGER, permission_id)
            WHERE rol_permission_id = $1
            RETURNING rol_permission_id, rol_id, permission_id, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(patch.rol_id)
        .bind(patch.permission_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        delete_row(&self.pool, TABLE, KEY, id).await
    }
}

#[async_trait]
impl SoftDeleteRepository for PgRolPermissionRepository {
    async fn find_all_active(&self) -> RepositoryResult<Vec<RolPermission>> {
        let rows = sqlx::query_as::<_, RolPermission>(
            r#"
            SELECT rol_permission_id, rol_id, permission_id, create_at, delete_at
            FROM rol_permissions
            WHERE delete_at IS NULL
            ORDER BY rol_permission_id
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
