//! PostgreSQL implementation of the destination repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::lifecycle::{delete_row, restore_row, soft_delete_row};
use crate::domain::entities::{Destination, DestinationPatch, NewDestination};
use crate::domain::repositories::{CrudRepository, RepositoryResult, SoftDeleteRepository};

const TABLE: &str = "destinations";
const KEY: &str = "destination_id";

/// PostgreSQL repository for destinations.
pub struct PgDestinationRepository {
    pool: Arc<PgPool>,
}

impl PgDestinationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgDestinationRepository {
    type Entity = Destination;

    async fn find_all(&self) -> RepositoryResult<Vec<Destination>> {
        let rows = sqlx::query_as::<_, Destination>(
            r#"
            SELECT destination_id, name, description, country, region, latitude, longitude,
                   create_at, delete_at
            FROM destinations
            ORDER BY destination_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Destination>> {
        let row = sqlx::query_as::<_, Destination>(
            r#"
            SELECT destination_id, name, description, country, region, latitude, longitude,
                   create_at, delete_at
            FROM destinations
            WHERE destination_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, draft: NewDestination) -> RepositoryResult<Destination> {
        let row = sqlx::query_as::<_, Destination>(
            r#"
            INSERT INTO destinations (name, description, country, region, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING destination_id, name, description, country, region, latitude, longitude,
                      create_at, delete_at
            "#,
        )
        .bind(draft.name)
        .bind(draft.description)
        .bind(draft.country)
        .bind(draft.region)
        .bind(draft.latitude)
        .bind(draft.longitude)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(
        &self,
        id: i32,
        draft: NewDestination,
    ) -> RepositoryResult<Option<Destination>> {
        let row = sqlx::query_as::<_, Destination>(
            r#"
            UPDATE destinations SET
                name        = $2,
                description = $3,
                country     = $4,
                region      = $5,
                latitude    = $6,
                longitude   = $7
            WHERE destination_id = $1
            RETURNING destination_id, name, description, country, region, latitude, longitude,
                      create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(draft.name)
        .bind(draft.description)
        .bind(draft.country)
        .bind(draft.region)
        .bind(draft.latitude)
        .bind(draft.longitude)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn patch(
        &self,
        id: i32,
        patch: DestinationPatch,
    ) -> RepositoryResult<Option<Destination>> {
        let set_description = patch.description.is_some();
        let set_country = patch.country.is_some();
        let set_region = patch.region.is_some();
        let set_latitude = patch.latitude.is_some();
        let set_longitude = patch.longitude.is_some();

        let row = sqlx::query_as::<_, Destination>(
            r#"
            UPDATE destinations SET
                name        = COALESCE($2::TEXT, name),
                description = CASE WHEN $3 THEN $4::TEXT ELSE description END,
                country     = CASE WHEN $5 THEN $6::TEXT ELSE country END,
                region      = CASE WHEN $7 THEN $8::TEXT ELSE region END,
                latitude    = CASE WHEN $9 THEN $10::NUMERIC ELSE latitude END,
                longitude   = CASE WHEN $11 THEN $12::NUMERIC ELSE longitude END
            WHERE destination_id = $1
            RETURNING destination_id, name, description, country, region, latitude, longitude,
                      create_at, delete_at
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(set_description)
        .bind(patch.description.flatten())
        .bind(set_country)
        .bind(patch.country.flatten())
        .bind(set_region)
        .bind(patch.region.flatten())
        .bind(set_latitude)
        .bind(patch.latitude.flatten())
        .bind(set_longitude)
        .bind(patch.longitude.flatten())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        delete_row(&self.pool, TABLE, KEY, id).await
    }
}

#[async_trait]
impl SoftDeleteRepository for PgDestinationRepository {
    async fn find_all_active(&self) -> RepositoryResult<Vec<Destination>> {
        let rows = sqlx::query_as::<_, Destination>(
            r#"
            SELECT destination_id, name, description, country, region, latitude, longitude,
                   create_at, delete_at
            FROM destinations
            WHERE delete_at IS NULL
            ORDER BY destination_id
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
