//! PostgreSQL implementation of the role/form/permission grant repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::lifecycle::{delete_row, restore_row, soft_delete_row};
use crate::domain::entities::{NewRolFormPermission, RolFormPermission, RolFormPermissionPatch};
use crate::domain::repositories::{CrudRepository, RepositoryResult, SoftDeleteRepository};

const TABLE: &str = "rol_form_permissions";
const KEY: &str = "rol_form_permission_id";

/// PostgreSQL repository for per-form permission grants.
///
/// Referenced roles, forms and permissions are checked by foreign keys only.
pub struct PgRolFormPermissionRepository {
    pool: Arc<PgPool>,
}

impl PgRolFormPermissionRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgRolFormPermissionRepository {
    type Entity = RolFormPermission;

    async fn find_all(&self) -> RepositoryResult<Vec<RolFormPermission>> {
        let rows = sqlx::query_as::<_, RolFormPermission>(
            r#"
            SELECT rol_form_permission_id, rol_id, form_id, permission_id, create_at, delete_at
            FROM rol_form_permissions
            ORDER BY rol_form_permission_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<RolFormPermission>> {
        let row = sqlx::query_as::<_, RolFormPermission>(
            r#"
            SELECT rol_form_permission_id, rol_id, form_id, permission_id, create_at, delete_at
            FROM rol_form_permissions
            WHERE rol_form_permission_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, draft: NewRolFormPermission) -> RepositoryResult<RolFormPermission> {
        let row = sqlx::query_as::<_, RolFormPermission>(
            r#"
            INSERT INTO rol_form_permissions (rol_id, form_id, permission_id)
            VALUES ($1, $2, $3)
            RETURNING rol_form_permission_id, rol_id, form_id, permission_id, create_at, delete_at
            "#,
        )
        .bind(draft.rol_id)
        .bind(draft.form_id)
        .bind(draft.permission_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(
        &self,
        id: i32,
        draft: NewRolFormPermission,
    ) -> RepositoryResult<Option<RolFormPermission>> {
        let row = sqlx::query_as::<_, RolFormPermission>(
            r#"
            UPDATE rol_form_permissions SET
                rol_id        = $2,
                form_id       = $3,
                permission_id = $4
            WHERE rol_form_permission_id = $1
            RETURNING rol_form_permission_id, rol_id, form_id, permission_id, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(draft.rol_id)
        .bind(draft.form_id)
        .bind(draft.permission_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn patch(
        &self,
        id: i32,
        patch: RolFormPermissionPatch,
    ) -> RepositoryResult<Option<RolFormPermission>> {
        let row = sqlx::query_as::<_, RolFormPermission>(
            r#"
            UPDATE rol_form_permissions SET
                rol_id        = COALESCE($2::INTEGER, rol_id),
                form_id       = COALESCE($3::INTEGER, form_id),
                permission_id = COALESCE($4::INTEGER, permission_id)
            WHERE rol_form_permission_id = $1
            RETURNING rol_form_permission_id, rol_id, form_id, permission_id, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(patch.rol_id)
        .bind(patch.form_id)
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
impl SoftDeleteRepository for PgRolFormPermissionRepository {
    async fn find_all_active(&self) -> RepositoryResult<Vec<RolFormPermission>> {
        let rows = sqlx::query_as::<_, RolFormPermission>(
            r#"
            SELECT rol_form_permission_id, rol_id, form_id, permission_id, create_at, delete_at
            FROM rol_form_permissions
            WHERE delete_at IS NULL
            ORDER BY rol_form_permission_id
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
