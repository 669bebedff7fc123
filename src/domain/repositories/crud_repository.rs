//! Generic persistence contract shared by every entity.

use async_trait::async_trait;

use crate::domain::entities::Entity;

/// Infrastructure fault raised while talking to the store.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepositoryError {
    /// Returns `true` when the statement referenced a missing parent row.
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            Self::Database(e) => e
                .as_database_error()
                .is_some_and(|db| db.is_foreign_key_violation()),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository interface for one entity table.
///
/// Each call is a single statement and commits on its own.
///
/// # Implementations
///
/// - `Pg*Repository` types in [`crate::infrastructure::persistence`]
/// - Test doubles built with `mockall::mock!`
#[async_trait]
pub trait CrudRepository: Send + Sync + 'static {
    type Entity: Entity;

    /// Lists every row, soft-deleted ones included, ordered by id.
    async fn find_all(&self) -> RepositoryResult<Vec<Self::Entity>>;

    /// Finds a row by id regardless of its soft-delete state.
    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Self::Entity>>;

    /// Inserts a row and returns it with its database-assigned id.
    async fn create(
        &self,
        draft: <Self::Entity as Entity>::Draft,
    ) -> RepositoryResult<Self::Entity>;

    /// Overwrites every mutable column. Returns `None` if the row does not exist.
    async fn update(
        &self,
        id: i32,
        draft: <Self::Entity as Entity>::Draft,
    ) -> RepositoryResult<Option<Self::Entity>>;

    /// Applies only the fields present in `patch`. Returns `None` if the row
    /// does not exist.
    async fn patch(
        &self,
        id: i32,
        patch: <Self::Entity as Entity>::Patch,
    ) -> RepositoryResult<Option<Self::Entity>>;

    /// Permanently removes a row. Returns `false` if it did not exist.
    async fn delete(&self, id: i32) -> RepositoryResult<bool>;
}

/// Soft-delete operations for tables with a `delete_at` column.
///
/// Soft delete overwrites `delete_at` even when already set, so repeating it
/// is harmless. Restore clears it.
#[async_trait]
pub trait SoftDeleteRepository: CrudRepository {
    /// Lists rows whose `delete_at` is `NULL`.
    async fn find_all_active(&self) -> RepositoryResult<Vec<Self::Entity>>;

    /// Stamps `delete_at` with the current time. Returns `false` if the row does not exist.
    async fn soft_delete(&self, id: i32) -> RepositoryResult<bool>;

    /// Clears `delete_at`. Returns `false` if the row does not exist.
    async fn restore(&self, id: i32) -> RepositoryResult<bool>;
}
