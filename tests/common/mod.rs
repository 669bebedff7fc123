#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use mockall::mock;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};
use travel_booking_api::api::routes::{
    DeleteResponse, resource_routes, soft_delete_resource_routes,
};
use travel_booking_api::application::services::CrudService;
use travel_booking_api::domain::entities::{
    NewPayment, NewRol, NewUser, Payment, PaymentPatch, Rol, RolPatch, User, UserPatch,
};
use travel_booking_api::domain::repositories::{
    CrudRepository, RepositoryResult, SoftDeleteRepository,
};

/// Role store kept in memory so HTTP scenarios can run without PostgreSQL.
#[derive(Default)]
pub struct InMemoryRolRepository {
    rows: Mutex<Vec<Rol>>,
}

impl InMemoryRolRepository {
    fn next_id(rows: &[Rol]) -> i32 {
        rows.iter().map(|r| r.rol_id).max().unwrap_or(0) + 1
    }
}

#[async_trait]
impl CrudRepository for InMemoryRolRepository {
    type Entity = Rol;

    async fn find_all(&self) -> RepositoryResult<Vec<Rol>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Rol>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.rol_id == id).cloned())
    }

    async fn create(&self, draft: NewRol) -> RepositoryResult<Rol> {
        let mut rows = self.rows.lock().unwrap();
        let rol = Rol {
            rol_id: Self::next_id(&rows),
            rol_name: draft.rol_name,
            description: draft.description,
            create_at: Utc::now(),
            delete_at: None,
        };
        rows.push(rol.clone());
        Ok(rol)
    }

    async fn update(&self, id: i32, draft: NewRol) -> RepositoryResult<Option<Rol>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|r| r.rol_id == id).map(|r| {
            r.rol_name = draft.rol_name;
            r.description = draft.description;
            r.clone()
        }))
    }

    async fn patch(&self, id: i32, patch: RolPatch) -> RepositoryResult<Option<Rol>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|r| r.rol_id == id).map(|r| {
            if let Some(name) = patch.rol_name {
                r.rol_name = name;
            }
            if let Some(description) = patch.description {
                r.description = description;
            }
            r.clone()
        }))
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.rol_id != id);
        Ok(rows.len() < before)
    }
}

#[async_trait]
impl SoftDeleteRepository for InMemoryRolRepository {
    async fn find_all_active(&self) -> RepositoryResult<Vec<Rol>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|r| r.delete_at.is_none()).cloned().collect())
    }

    async fn soft_delete(&self, id: i32) -> RepositoryResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows
            .iter_mut()
            .find(|r| r.rol_id == id)
            .map(|r| r.delete_at = Some(Utc::now()))
            .is_some())
    }

    async fn restore(&self, id: i32) -> RepositoryResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows
            .iter_mut()
            .find(|r| r.rol_id == id)
            .map(|r| r.delete_at = None)
            .is_some())
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl CrudRepository for UserRepo {
        type Entity = User;

        async fn find_all(&self) -> RepositoryResult<Vec<User>>;
        async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        async fn create(&self, draft: NewUser) -> RepositoryResult<User>;
        async fn update(&self, id: i32, draft: NewUser) -> RepositoryResult<Option<User>>;
        async fn patch(&self, id: i32, patch: UserPatch) -> RepositoryResult<Option<User>>;
        async fn delete(&self, id: i32) -> RepositoryResult<bool>;
    }

    #[async_trait]
    impl SoftDeleteRepository for UserRepo {
        async fn find_all_active(&self) -> RepositoryResult<Vec<User>>;
        async fn soft_delete(&self, id: i32) -> RepositoryResult<bool>;
        async fn restore(&self, id: i32) -> RepositoryResult<bool>;
    }
}

mock! {
    pub PaymentRepo {}

    #[async_trait]
    impl CrudRepository for PaymentRepo {
        type Entity = Payment;

        async fn find_all(&self) -> RepositoryResult<Vec<Payment>>;
        async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Payment>>;
        async fn create(&self, draft: NewPayment) -> RepositoryResult<Payment>;
        async fn update(&self, id: i32, draft: NewPayment) -> RepositoryResult<Option<Payment>>;
        async fn patch(&self, id: i32, patch: PaymentPatch) -> RepositoryResult<Option<Payment>>;
        async fn delete(&self, id: i32) -> RepositoryResult<bool>;
    }
}

pub fn rol_server(repo: InMemoryRolRepository) -> TestServer {
    let service = Arc::new(CrudService::new(Arc::new(repo)));
    let app = soft_delete_resource_routes::<Rol, InMemoryRolRepository, _>(
        "/api/Rol",
        DeleteResponse::Message,
    )
    .with_state(service);
    TestServer::new(app).unwrap()
}

pub fn user_server(repo: MockUserRepo) -> TestServer {
    let service = Arc::new(CrudService::new(Arc::new(repo)));
    let app = soft_delete_resource_routes::<User, MockUserRepo, _>(
        "/api/User",
        DeleteResponse::NoContent,
    )
    .with_state(service);
    TestServer::new(app).unwrap()
}

pub fn payment_server(repo: MockPaymentRepo) -> TestServer {
    let service = Arc::new(CrudService::new(Arc::new(repo)));
    let app =
        resource_routes::<Payment, MockPaymentRepo, _>("/api/Payment", DeleteResponse::Message)
            .with_state(service);
    TestServer::new(app).unwrap()
}

pub fn sample_user(id: i32, username: &str) -> User {
    User {
        user_id: id,
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        registration_date: Utc::now(),
        create_at: Utc::now(),
        delete_at: None,
    }
}

pub async fn insert_rol(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO rols (rol_name) VALUES ($1) RETURNING rol_id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_user(pool: &PgPool, username: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO users (username, email, password_hash) VALUES ($1, $2, 'x') RETURNING user_id",
    )
    .bind(username)
    .bind(format!("{username}@example.com"))
    .fetch_one(pool)
    .await
    .unwrap()
}
