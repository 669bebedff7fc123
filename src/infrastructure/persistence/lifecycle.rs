//! Row lifecycle statements shared by every repository.
//!
//! `table` and `key` are interpolated into SQL and must be trusted identifiers.

use sqlx::PgPool;

use crate::domain::repositories::RepositoryResult;

/// `DELETE FROM {table} WHERE {key} = $1`
pub(crate) async fn delete_row(
    pool: &PgPool,
    table: &str,
    key: &str,
    id: i32,
) -> RepositoryResult<bool> {
    let sql = format!("DELETE FROM {table} WHERE {key} = $1");
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;

    Ok(result.rows_affected() > 0)
}

/// Stamps `delete_at` with `NOW()`, overwriting any previous timestamp.
pub(crate) async fn soft_delete_row(
    pool: &PgPool,
    table: &str,
    key: &str,
    id: i32,
) -> RepositoryResult<bool> {
    let sql = format!("UPDATE {table} SET delete_at = NOW() WHERE {key} = $1");
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;

    Ok(result.rows_affected() > 0)
}

/// Clears `delete_at`.
pub(crate) async fn restore_row(
    pool: &PgPool,
    table: &str,
    key: &str,
    id: i32,
) -> RepositoryResult<bool> {
    let sql = format!("UPDATE {table} SET delete_at = NULL WHERE {key} = $1");
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;

    Ok(result.rows_affected() > 0)
}

/// Counts all rows and the soft-deleted subset of a table.
pub async fn count_rows(
    pool: &PgPool,
    table: &str,
    soft_delete: bool,
) -> RepositoryResult<(i64, i64)> {
    let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;

    let deleted: i64 = if soft_delete {
        sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM {table} WHERE delete_at IS NOT NULL"
        ))
        .fetch_one(pool)
        .await?
    } else {
        0
    };

    Ok((total, deleted))
}
