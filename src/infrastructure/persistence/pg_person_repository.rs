//! PostgreSQL implementation of the person repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::lifecycle::delete_row;
use crate::domain::entities::{NewPerson, Person, PersonPatch};
use crate::domain::repositories::{CrudRepository, RepositoryResult};

const TABLE: &str = "persons";
const KEY: &str = "person_id";

pub struct PgPersonRepository {
    pool: Arc<PgPool>,
}

impl PgPersonRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgPersonRepository {
    type Entity = Person;

    async fn find_all(&self) -> RepositoryResult<Vec<Person>> {
        let rows = sqlx::query_as::<_, Person>(
            r#"
            SELECT person_id, first_name, last_name, document, phone_number, email
            FROM persons
            ORDER BY person_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Person>> {
        let row = sqlx::query_as::<_, Person>(
            r#"
            SELECT person_id, first_name, last_name, document, phone_number, email
            FROM persons
            WHERE person_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, draft: NewPerson) -> RepositoryResult<Person> {
        let row = sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO persons (first_name, last_name, document, phone_number, email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING person_id, first_name, last_name, document, phone_number, email
            "#,
        )
        .bind(draft.first_name)
        .bind(draft.last_name)
        .bind(draft.document)
        .bind(draft.phone_number)
        .bind(draft.email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i32, draft: NewPerson) -> RepositoryResult<Option<Person>> {
        let row = sqlx::query_as::<_, Person>(
            r#"
            UPDATE persons SET
                first_name   = $2,
                last_name    = $3,
                document     = $4,
                phone_number = $5,
                email        = $6
            WHERE person_id = $1
            RETURNING person_id, first_name, last_name, document, phone_number, email
            "#,
        )
        .bind(id)
        .bind(draft.first_name)
        .bind(draft.last_name)
        .bind(draft.document)
        .bind(draft.phone_number)
        .bind(draft.email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn patch(&self, id: i32, patch: PersonPatch) -> RepositoryResult<Option<Person>> {
        let row = sqlx::query_as::<_, Person>(
            r#"
            UPDATE persons SET
                first_name   = COALESCE($2::TEXT, first_name),
                last_name    = COALESCE($3::TEXT, last_name),
                document     = COALESCE($4::BIGINT, document),
                phone_number = COALESCE($5::BIGINT, phone_number),
                email        = COALESCE($6::TEXT, email)
            WHERE person_id = $1
            RETURNING person_id, first_name, last_name, document, phone_number, email
            "#,
        )
        .bind(id)
        .bind(patch.first_name)
        .bind(patch.last_name)
        .bind(patch.document)
        .bind(patch.phone_number)
        .bind(patch.email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        delete_row(&self.pool, TABLE, KEY, id).await
    }
}
