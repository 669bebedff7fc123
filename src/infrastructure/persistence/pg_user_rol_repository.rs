//! PostgreSQL implementation of the user-role assignment repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::lifecycle::{delete_row, restore_row, soft_delete_row};
use crate::domain::entities::{NewUserRol, UserRol, UserRolPatch};
use crate::domain::repositories::{CrudRepository, RepositoryResult, SoftDeleteRepository};

const TABLE: &str = "user_rols";
const KEY: &str = "user_rol_id";

pub struct PgUserRolRepository {
    pool: Arc<PgPool>,
}

impl PgUserRolRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgUserRolRepository {
    type Entity = UserRol;

    async fn find_all(&self) -> RepositoryResult<Vec<UserRol>> {
        let rows = sqlx::query_as::<_, UserRol>(
            r#"
            SELECT user_rol_id, user_id, rol_id, create_at, delete_at
            FROM user_rols
            ORDER BY user_rol_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<UserRol>> {
        let row = sqlx::query_as::<_, UserRol>(
            r#"
            SELECT user_rol_id, user_id, rol_id, create_at, delete_at
            FROM user_rols
            WHERE user_rol_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, draft: NewUserRol) -> RepositoryResult<UserRol> {
        let row = sqlx::query_as::<_, UserRol>(
            r#"
            INSERT INTO user_rols (user_id, rol_id)
            VALUES ($1, $2)
            RETURNING user_rol_id, user_id, rol_id, create_at, delete_at
            "#,
        )
        .bind(draft.user_id)
        .bind(draft.rol_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i32, draft: NewUserRol) -> RepositoryResult<Option<UserRol>> {
        let row = sqlx::query_as::<_, UserRol>(
            r#"
            UPDATE user_rols SET
                user_id = $2,
                rol_id = $3
            WHERE user_rol_id = $1
            RETURNING user_rol_id, user_id, rol_id, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(draft.user_id)
        .bind(draft.rol_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn patch(&self, id: i32, patch: UserRolPatch) -> RepositoryResult<Option<UserRol>> {
        let row = sqlx::query_as::<_, UserRol>(
            r#"
            UPDATE user_rols SET
                user_id = COALESCE($2::INTEGER, user_id),
                rol_id = COALESCE($3::INTEGER, rol_id)
            WHERE user_rol_id = $1
            RETURNING user_rol_id, user_id, rol_id, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(patch.user_id)
        .bind(patch.rol_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        delete_row(&self.pool, TABLE, KEY, id).await
    }
}

#[async_trait]
impl SoftDeleteRepository for PgUserRolRepository {
    async fn find_all_active(&self) -> RepositoryResult<Vec<UserRol>> {
        let rows = sqlx::query_as::<_, UserRol>(
            r#"
            SELECT user_rol_id, user_id, rol_id, create_at, delete_at
            FROM user_rols
            WHERE delete_at IS NULL
            ORDER BY user_rol_id
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
