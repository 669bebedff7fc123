//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::lifecycle::{delete_row, restore_row, soft_delete_row};
use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::{CrudRepository, RepositoryResult, SoftDeleteRepository};

const TABLE: &str = "users";
const KEY: &str = "user_id";

/// PostgreSQL repository for user accounts.
///
/// Stores password hashes only; hashing happens before the draft reaches
/// this layer.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgUserRepository {
    type Entity = User;

    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, email, password_hash, registration_date, create_at, delete_at
            FROM users
            ORDER BY user_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<User>> {
        let row = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, email, password_hash, registration_date, create_at, delete_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, draft: NewUser) -> RepositoryResult<User> {
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING user_id, username, email, password_hash, registration_date, create_at, delete_at
            "#,
        )
        .bind(draft.username)
        .bind(draft.email)
        .bind(draft.password_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i32, draft: NewUser) -> RepositoryResult<Option<User>> {
        let row = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                username      = $2,
                email         = $3,
                password_hash = $4
            WHERE user_id = $1
            RETURNING user_id, username, email, password_hash, registration_date, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(draft.username)
        .bind(draft.email)
        .bind(draft.password_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn patch(&self, id: i32, patch: UserPatch) -> RepositoryResult<Option<User>> {
        let row = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                username      = COALESCE($2::TEXT, username),
                email         = COALESCE($3::TEXT, email),
                password_hash = COALESCE($4::TEXT, password_hash)
            WHERE user_id = $1
            RETURNING user_id, username, email, password_hash, registration_date, create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(patch.username)
        .bind(patch.email)
        .bind(patch.password_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        delete_row(&self.pool, TABLE, KEY, id).await
    }
}

#[async_trait]
impl SoftDeleteRepository for PgUserRepository {
    async fn find_all_active(&self) -> RepositoryResult<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, email, password_hash, registration_date, create_at, delete_at
            FROM users
            WHERE delete_at IS NULL
            ORDER BY user_id
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
