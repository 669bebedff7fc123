mod common;

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use travel_booking_api::domain::entities::{
    NewActivity, NewChangeLog, NewDestination, NewForm, NewFormModule, NewModule, NewPermission,
    NewRolFormPermission, NewRolPermission, NewUserActivity,
};
use travel_booking_api::domain::repositories::CrudRepository;
use travel_booking_api::infrastructure::persistence::{
    PgActivityRepository, PgChangeLogRepository, PgDestinationRepository, PgFormModuleRepository,
    PgFormRepository, PgModuleRepository, PgPermissionRepository, PgRolFormPermissionRepository,
    PgRolPermissionRepository, PgUserActivityRepository,
};

#[sqlx::test]
async fn test_activity_keeps_exact_decimals(pool: PgPool) {
    let repo = PgActivityRepository::new(Arc::new(pool));

    let created = repo
        .create(NewActivity {
            name: "Snorkeling".to_string(),
            description: Some("Reef tour".to_string()),
            category: None,
            price: Decimal::new(45_555, 3),
            duration_hours: Decimal::from(10_000),
        })
        .await
        .unwrap();

    assert_eq!(created.price, Decimal::new(45_555, 3));
    assert_eq!(created.duration_hours, Decimal::from(10_000));
    assert_eq!(created.description.as_deref(), Some("Reef tour"));
    assert!(created.category.is_none());

    let found = repo.find_by_id(created.activity_id).await.unwrap().unwrap();
    assert_eq!(found, created);
}

#[sqlx::test]
async fn test_destination_keeps_fine_coordinates(pool: PgPool) {
    let repo = PgDestinationRepository::new(Arc::new(pool));

    let latitude = Decimal::new(-13_531_950_123, 9);
    let longitude = Decimal::new(-71_967_463_456, 9);

    let created = repo
        .create(NewDestination {
            name: "Cusco".to_string(),
            description: None,
            country: Some("Peru".to_string()),
            region: Some("Andes".to_string()),
            latitude: Some(latitude),
            longitude: Some(longitude),
        })
        .await
        .unwrap();

    assert_eq!(created.latitude, Some(latitude));
    assert_eq!(created.longitude, Some(longitude));

    let found = repo
        .find_by_id(created.destination_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, created);
}

#[sqlx::test]
async fn test_catalog_rows_round_trip(pool: PgPool) {
    let pool = Arc::new(pool);
    let forms = PgFormRepository::new(pool.clone());
    let modules = PgModuleRepository::new(pool.clone());
    let permissions = PgPermissionRepository::new(pool.clone());
    let change_logs = PgChangeLogRepository::new(pool.clone());

    let form = forms
        .create(NewForm {
            name: "Checkout".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(form.name, "Checkout");
    assert_eq!(forms.find_by_id(form.form_id).await.unwrap(), Some(form));

    let module = modules
        .create(NewModule {
            code: 0,
            name: "Reports".to_string(),
            active: false,
        })
        .await
        .unwrap();
    assert_eq!(module.code, 0);
    assert!(!module.active);
    assert_eq!(
        modules.find_by_id(module.module_id).await.unwrap(),
        Some(module)
    );

    let permission = permissions
        .create(NewPermission {
            permission_name: "bookings.write".to_string(),
            description: None,
        })
        .await
        .unwrap();
    assert_eq!(permission.permission_name, "bookings.write");
    assert_eq!(
        permissions
            .find_by_id(permission.permission_id)
            .await
            .unwrap(),
        Some(permission)
    );

    let changed_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();
    let entry = change_logs
        .create(NewChangeLog {
            description: "Imported catalog".to_string(),
            change_date: Some(changed_at),
        })
        .await
        .unwrap();
    assert_eq!(entry.change_date, changed_at);
    assert_eq!(
        change_logs.find_by_id(entry.change_log_id).await.unwrap(),
        Some(entry)
    );
}

#[sqlx::test]
async fn test_join_rows_round_trip(pool: PgPool) {
    let user_id = common::insert_user(&pool, "alice").await;
    let rol_id = common::insert_rol(&pool, "Admin").await;

    let pool = Arc::new(pool);

    let activity = PgActivityRepository::new(pool.clone())
        .create(NewActivity {
            name: "Hiking".to_string(),
            description: None,
            category: None,
            price: Decimal::ZERO,
            duration_hours: Decimal::new(25, 1),
        })
        .await
        .unwrap();
    let form = PgFormRepository::new(pool.clone())
        .create(NewForm {
            name: "Profile".to_string(),
        })
        .await
        .unwrap();
    let module = PgModuleRepository::new(pool.clone())
        .create(NewModule {
            code: 3,
            name: "Accounts".to_string(),
            active: true,
        })
        .await
        .unwrap();
    let permission = PgPermissionRepository::new(pool.clone())
        .create(NewPermission {
            permission_name: "profile.read".to_string(),
            description: Some("Read own profile".to_string()),
        })
        .await
        .unwrap();

    let rol_permissions = PgRolPermissionRepository::new(pool.clone());
    let link = rol_permissions
        .create(NewRolPermission {
            rol_id,
            permission_id: permission.permission_id,
        })
        .await
        .unwrap();
    assert_eq!(link.rol_id, rol_id);
    assert_eq!(link.permission_id, permission.permission_id);
    assert_eq!(
        rol_permissions
            .find_by_id(link.rol_permission_id)
            .await
            .unwrap(),
        Some(link)
    );

    let user_activities = PgUserActivityRepository::new(pool.clone());
    let link = user_activities
        .create(NewUserActivity {
            user_id,
            activity_id: activity.activity_id,
        })
        .await
        .unwrap();
    assert_eq!(link.user_id, user_id);
    assert_eq!(link.activity_id, activity.activity_id);
    assert_eq!(
        user_activities
            .find_by_id(link.user_activity_id)
            .await
            .unwrap(),
        Some(link)
    );

    let form_modules = PgFormModuleRepository::new(pool.clone());
    let link = form_modules
        .create(NewFormModule {
            form_id: form.form_id,
            module_id: module.module_id,
        })
        .await
        .unwrap();
    assert_eq!(link.form_id, form.form_id);
    assert_eq!(link.module_id, module.module_id);
    assert_eq!(
        form_modules.find_by_id(link.form_module_id).await.unwrap(),
        Some(link)
    );

    let grants = PgRolFormPermissionRepository::new(pool);
    let grant = grants
        .create(NewRolFormPermission {
            rol_id,
            form_id: form.form_id,
            permission_id: permission.permission_id,
        })
        .await
        .unwrap();
    assert_eq!(grant.rol_id, rol_id);
    assert_eq!(grant.form_id, form.form_id);
    assert_eq!(grant.permission_id, permission.permission_id);
    assert_eq!(
        grants
            .find_by_id(grant.rol_form_permission_id)
            .await
            .unwrap(),
        Some(grant)
    );
}
