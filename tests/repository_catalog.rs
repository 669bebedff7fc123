mod common;

use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use travel_booking_api::domain::entities::{
    ChangeLogPatch, DestinationPatch, ModulePatch, NewChangeLog, NewDestination, NewModule,
    NewPayment, NewPerson, NewUser, UserPatch,
};
use travel_booking_api::domain::repositories::{CrudRepository, SoftDeleteRepository};
use travel_booking_api::infrastructure::persistence::{
    PgChangeLogRepository, PgDestinationRepository, PgModuleRepository, PgPaymentRepository,
    PgPersonRepository, PgUserRepository,
};

#[sqlx::test]
async fn test_destination_patch_clears_coordinates(pool: PgPool) {
    let repo = PgDestinationRepository::new(Arc::new(pool));

    let created = repo
        .create(NewDestination {
            name: "Cusco".to_string(),
            description: None,
            country: Some("Peru".to_string()),
            region: None,
            latitude: Some(Decimal::new(-135_319, 4)),
            longitude: Some(Decimal::new(-719_675, 4)),
        })
        .await
        .unwrap();

    assert_eq!(created.latitude, Some(Decimal::new(-135_319, 4)));

    let patched = repo
        .patch(
            created.destination_id,
            DestinationPatch {
                latitude: Some(None),
                longitude: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(patched.name, "Cusco");
    assert_eq!(patched.country.as_deref(), Some("Peru"));
    assert!(patched.latitude.is_none());
    assert!(patched.longitude.is_none());
}

#[sqlx::test]
async fn test_module_patch_writes_false_and_zero(pool: PgPool) {
    let repo = PgModuleRepository::new(Arc::new(pool));

    let created = repo
        .create(NewModule {
            code: 7,
            name: "Bookings".to_string(),
            active: true,
        })
        .await
        .unwrap();

    let patched = repo
        .patch(
            created.module_id,
            ModulePatch {
                code: Some(0),
                active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(patched.code, 0);
    assert!(!patched.active);
    assert_eq!(patched.name, "Bookings");
}

#[sqlx::test]
async fn test_user_patch_keeps_hash_when_absent(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let created = repo
        .create(NewUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash-1".to_string(),
        })
        .await
        .unwrap();

    let patched = repo
        .patch(
            created.user_id,
            UserPatch {
                email: Some("new@example.com".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(patched.email, "new@example.com");
    assert_eq!(patched.password_hash, "hash-1");
    assert_eq!(patched.registration_date, created.registration_date);

    assert!(repo.soft_delete(created.user_id).await.unwrap());
    assert!(repo.find_all_active().await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_plain_tables_round_trip(pool: PgPool) {
    let pool = Arc::new(pool);
    let payments = PgPaymentRepository::new(pool.clone());
    let persons = PgPersonRepository::new(pool.clone());

    let payment = payments
        .create(NewPayment {
            payment_method: "card".to_string(),
            amount: Decimal::new(12_950, 2),
            activity: "Snorkeling".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(payment.amount, Decimal::new(12_950, 2));

    let person = persons
        .create(NewPerson {
            first_name: "Ana".to_string(),
            last_name: "Rojas".to_string(),
            document: 1_234_567_890,
            phone_number: 3_001_234_567,
            email: "ana@example.com".to_string(),
        })
        .await
        .unwrap();

    let found = persons.find_by_id(person.person_id).await.unwrap().unwrap();
    assert_eq!(found.document, 1_234_567_890);
    assert_eq!(found.phone_number, 3_001_234_567);

    assert!(payments.delete(payment.payment_id).await.unwrap());
    assert!(persons.delete(person.person_id).await.unwrap());
}

#[sqlx::test]
async fn test_change_log_defaults_date(pool: PgPool) {
    let repo = PgChangeLogRepository::new(Arc::new(pool));

    let created = repo
        .create(NewChangeLog {
            description: "Seeded catalog".to_string(),
            change_date: None,
        })
        .await
        .unwrap();

    let patched = repo
        .patch(
            created.change_log_id,
            ChangeLogPatch {
                description: Some("Seeded catalog v2".to_string()),
                change_date: None,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(patched.description, "Seeded catalog v2");
    assert_eq!(patched.change_date, created.change_date);
}
