mod common;

use sqlx::PgPool;
use std::sync::Arc;
use travel_booking_api::domain::entities::{NewRol, RolPatch};
use travel_booking_api::domain::repositories::{CrudRepository, SoftDeleteRepository};
use travel_booking_api::infrastructure::persistence::PgRolRepository;

fn draft(name: &str, description: Option<&str>) -> NewRol {
    NewRol {
        rol_name: name.to_string(),
        description: description.map(str::to_string),
    }
}

#[sqlx::test]
async fn test_create_and_find_rol(pool: PgPool) {
    let repo = PgRolRepository::new(Arc::new(pool));

    let created = repo
        .create(draft("Admin", Some("Full access")))
        .await
        .unwrap();

    assert!(created.rol_id > 0);
    assert!(created.delete_at.is_none());

    let found = repo.find_by_id(created.rol_id).await.unwrap().unwrap();
    assert_eq!(found.rol_name, "Admin");
    assert_eq!(found.description.as_deref(), Some("Full access"));
}

#[sqlx::test]
async fn test_find_missing_rol_returns_none(pool: PgPool) {
    let repo = PgRolRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(999_999).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_update_overwrites_nullable_fields(pool: PgPool) {
    let repo = PgRolRepository::new(Arc::new(pool));
    let created = repo.create(draft("Admin", Some("Full access"))).await.unwrap();

    let updated = repo
        .update(created.rol_id, draft("Guest", None))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.rol_name, "Guest");
    assert!(updated.description.is_none());
    assert_eq!(updated.create_at, created.create_at);

    assert!(repo.update(999_999, draft("x", None)).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_patch_applies_only_present_fields(pool: PgPool) {
    let repo = PgRolRepository::new(Arc::new(pool));
    let created = repo.create(draft("Admin", Some("Full access"))).await.unwrap();

    let renamed = repo
        .patch(
            created.rol_id,
            RolPatch {
                rol_name: Some("Owner".to_string()),
                description: None,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(renamed.rol_name, "Owner");
    assert_eq!(renamed.description.as_deref(), Some("Full access"));

    let cleared = repo
        .patch(
            created.rol_id,
            RolPatch {
                rol_name: None,
                description: Some(None),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(cleared.rol_name, "Owner");
    assert!(cleared.description.is_none());
}

#[sqlx::test]
async fn test_soft_delete_and_restore(pool: PgPool) {
    let repo = PgRolRepository::new(Arc::new(pool));
    let kept = repo.create(draft("Admin", None)).await.unwrap();
    let hidden = repo.create(draft("Guest", None)).await.unwrap();

    assert!(repo.soft_delete(hidden.rol_id).await.unwrap());
    assert!(repo.soft_delete(hidden.rol_id).await.unwrap());

    let active = repo.find_all_active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].rol_id, kept.rol_id);

    let still_readable = repo.find_by_id(hidden.rol_id).await.unwrap().unwrap();
    assert!(still_readable.delete_at.is_some());
    assert_eq!(repo.find_all().await.unwrap().len(), 2);

    assert!(repo.restore(hidden.rol_id).await.unwrap());
    assert_eq!(repo.find_all_active().await.unwrap().len(), 2);

    assert!(!repo.soft_delete(999_999).await.unwrap());
    assert!(!repo.restore(999_999).await.unwrap());
}

#[sqlx::test]
async fn test_delete_rol(pool: PgPool) {
    let repo = PgRolRepository::new(Arc::new(pool));
    let created = repo.create(draft("Temp", None)).await.unwrap();

    assert!(repo.delete(created.rol_id).await.unwrap());
    assert!(!repo.delete(created.rol_id).await.unwrap());
    assert!(repo.find_by_id(created.rol_id).await.unwrap().is_none());
}
