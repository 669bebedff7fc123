//! PostgreSQL implementation of the role repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::lifecycle::{delete_row, restore_row, soft_delete_row};
use crate::domain::entities::{NewRol, Rol, RolPatch};
use crate::domain::repositories::{CrudRepository, RepositoryResult, SoftDeleteRepository};

const TABLE: &str = "rols";
const KEY: &str = "rol_id";

/// PostgreSQL repository for roles.
///
/// Reads are not filtered by `delete_at`; use
/// [`SoftDeleteRepository::find_all_active`] for the live subset.
pub struct PgRolRepository {
    pool: Arc<PgPool>,
}

impl PgRolRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgRolRepository {
    type Entity = Rol;

    async fn find_all(&self) -> RepositoryResult<Vec<Rol>> {
        let rows = sqlx::query_as::<_, Rol>(
            r#"
            SELECT rol_id, rol_name, description, create_at, delete_at
            FROM rols
            ORDER BY rol_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Rol>> {
        let row = sqlx::query_as::<_, Rol>(
            r#"
            SELECT rol_id, rol_name, description, create_at, delete_at
            FROM rols
            WHERE rol_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, draft: NewRol) -> RepositoryResult<Rol> {
        let row = sqlx::query_as::<_, Rol>(
            r#"
            INSERT INTO rols (rol_name, description)
            VALUES ($1, $2)
            RETURNING rol_id, rol_name, description, create_at, delete_at
            "#,
        )
        .bind(draft.rol_name)
        .bind(draft.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i32, draft: NewRol) -> RepositoryResult<Option<Rol>> {
        let row = sqlx::query_as::<_, Rol>(
            r#"
            UPDATE rols SET
                rol_name    = $2,
                description = $3
            WHERE rol_id = $1
            RETURNING rol_id, rol_name, description, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(draft.rol_name)
        .bind(draft.description)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn patch(&self, id: i32, patch: RolPatch) -> RepositoryResult<Option<Rol>> {
        let set_description = patch.description.is_some();

        let row = sqlx::query_as::<_, Rol>(
            r#"
            UPDATE rols SET
                rol_name    = COALESCE($2::TEXT, rol_name),
                description = CASE WHEN $3 THEN $4::TEXT ELSE description END
            WHERE rol_id = $1
            RETURNING rol_id, rol_name, description, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(patch.rol_name)
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
impl SoftDeleteRepository for PgRolRepository {
    async fn find_all_active(&self) -> RepositoryResult<Vec<Rol>> {
        let rows = sqlx::query_as::<_, Rol>(
            r#"
            SELECT rol_id, rol_name, description, create_at, delete_at
            FROM rols
            WHERE delete_at IS NULL
            ORDER BY rol_id
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
