mod common;

use sqlx::PgPool;
use std::sync::Arc;
use travel_booking_api::domain::entities::{NewUserRol, UserRolPatch};
use travel_booking_api::domain::repositories::{CrudRepository, SoftDeleteRepository};
use travel_booking_api::infrastructure::persistence::PgUserRolRepository;

#[sqlx::test]
async fn test_user_rol_links_existing_rows(pool: PgPool) {
    let user_id = common::insert_user(&pool, "alice").await;
    let admin = common::insert_rol(&pool, "Admin").await;
    let guest = common::insert_rol(&pool, "Guest").await;

    let repo = PgUserRolRepository::new(Arc::new(pool));

    let link = repo
        .create(NewUserRol {
            user_id,
            rol_id: admin,
        })
        .await
        .unwrap();

    assert_eq!(link.user_id, user_id);
    assert_eq!(link.rol_id, admin);

    let moved = repo
        .patch(
            link.user_rol_id,
            UserRolPatch {
                user_id: None,
                rol_id: Some(guest),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(moved.user_id, user_id);
    assert_eq!(moved.rol_id, guest);

    assert!(repo.soft_delete(link.user_rol_id).await.unwrap());
    assert!(repo.find_all_active().await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_user_rol_missing_parent_is_foreign_key_violation(pool: PgPool) {
    let user_id = common::insert_user(&pool, "bob").await;
    let repo = PgUserRolRepository::new(Arc::new(pool));

    let err = repo
        .create(NewUserRol {
            user_id,
            rol_id: 424_242,
        })
        .await
        .unwrap_err();

    assert!(err.is_foreign_key_violation());
}

#[sqlx::test]
async fn test_deleting_parent_cascades_to_links(pool: PgPool) {
    let user_id = common::insert_user(&pool, "carol").await;
    let rol_id = common::insert_rol(&pool, "Admin").await;

    let repo = PgUserRolRepository::new(Arc::new(pool.clone()));
    let link = repo.create(NewUserRol { user_id, rol_id }).await.unwrap();

    sqlx::query("DELETE FROM users WHERE user_id = $1")
        .bind(user_id)
        .execute(&pool)
        .await
        .unwrap();

    assert!(repo.find_by_id(link.user_rol_id).await.unwrap().is_none());
}
