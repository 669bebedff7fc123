mod common;

use axum::http::StatusCode;
use common::{InMemoryRolRepository, rol_server};
use serde_json::{Value, json};

async fn create_admin(server: &axum_test::TestServer) -> i64 {
    let response = server
        .post("/api/Rol")
        .json(&json!({"rolName": "Admin", "description": "Full access"}))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["rolId"].as_i64().unwrap()
}

// ─── LIFECYCLE ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_rol_create_get_soft_delete_restore() {
    let server = rol_server(InMemoryRolRepository::default());

    let response = server
        .post("/api/Rol")
        .json(&json!({"rolName": "Admin", "description": "Full access"}))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created = response.json::<Value>();
    let id = created["rolId"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        format!("/api/Rol/{id}")
    );

    let fetched = server.get(&format!("/api/Rol/{id}")).await;
    fetched.assert_status_ok();
    let body = fetched.json::<Value>();
    assert_eq!(body["rolName"], "Admin");
    assert_eq!(body["description"], "Full access");

    server
        .delete(&format!("/api/Rol/softdelete/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // Direct reads are not filtered by the deletion mark.
    server.get(&format!("/api/Rol/{id}")).await.assert_status_ok();

    let active = server.get("/api/Rol/active").await.json::<Value>();
    assert!(active.as_array().unwrap().is_empty());

    let restored = server.patch(&format!("/api/Rol/restore/{id}")).await;
    restored.assert_status_ok();
    assert!(restored.json::<Value>()["message"].is_string());

    let active = server.get("/api/Rol/active").await.json::<Value>();
    assert_eq!(active.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_rol_list_includes_soft_deleted() {
    let server = rol_server(InMemoryRolRepository::default());

    let first = create_admin(&server).await;
    create_admin(&server).await;

    server
        .delete(&format!("/api/Rol/softdelete/{first}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let all = server.get("/api/Rol").await.json::<Value>();
    let active = server.get("/api/Rol/active").await.json::<Value>();

    assert_eq!(all.as_array().unwrap().len(), 2);
    assert_eq!(active.as_array().unwrap().len(), 1);
}

// ─── READ ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_rol_get_non_positive_id_is_bad_request() {
    let server = rol_server(InMemoryRolRepository::default());

    let response = server.get("/api/Rol/0").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["message"].is_string());
}

#[tokio::test]
async fn test_rol_get_non_numeric_id_is_bad_request() {
    let server = rol_server(InMemoryRolRepository::default());

    let response = server.get("/api/Rol/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Invalid path parameter");
}

#[tokio::test]
async fn test_rol_get_missing_is_not_found() {
    let server = rol_server(InMemoryRolRepository::default());

    let response = server.get("/api/Rol/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Rol with id 999 not found");
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_rol_create_blank_name_is_bad_request() {
    let server = rol_server(InMemoryRolRepository::default());

    let response = server.post("/api/Rol").json(&json!({"rolName": "   "})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["message"].as_str().unwrap().contains("Rol name is required"));
    assert!(body.get("details").is_some());
}

#[tokio::test]
async fn test_rol_create_malformed_json_is_bad_request() {
    let server = rol_server(InMemoryRolRepository::default());

    let response = server
        .post("/api/Rol")
        .content_type("application/json")
        .text("{not json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Invalid request body");
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_rol_put_overwrites_all_fields() {
    let server = rol_server(InMemoryRolRepository::default());
    let id = create_admin(&server).await;

    let response = server
        .put(&format!("/api/Rol/{id}"))
        .json(&json!({"rolId": 12345, "rolName": "Guest"}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["rolId"], id);
    assert_eq!(body["rolName"], "Guest");
    assert!(body["description"].is_null());
}

#[tokio::test]
async fn test_rol_put_missing_is_not_found() {
    let server = rol_server(InMemoryRolRepository::default());

    let response = server
        .put("/api/Rol/77")
        .json(&json!({"rolName": "Guest"}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Rol with id 77 not found");
}

#[tokio::test]
async fn test_rol_patch_blank_name_keeps_value() {
    let server = rol_server(InMemoryRolRepository::default());
    let id = create_admin(&server).await;

    let response = server
        .patch(&format!("/api/Rol/{id}"))
        .json(&json!({"rolName": "", "description": "Read only"}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["rolName"], "Admin");
    assert_eq!(body["description"], "Read only");
}

#[tokio::test]
async fn test_rol_patch_null_clears_description() {
    let server = rol_server(InMemoryRolRepository::default());
    let id = create_admin(&server).await;

    let response = server
        .patch(&format!("/api/Rol/{id}"))
        .json(&json!({"description": null}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["rolName"], "Admin");
    assert!(body["description"].is_null());
}

#[tokio::test]
async fn test_rol_patch_missing_is_not_found() {
    let server = rol_server(InMemoryRolRepository::default());

    let response = server
        .patch("/api/Rol/5")
        .json(&json!({"rolName": "Guest"}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Rol with id 5 not found");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_rol_delete_returns_message() {
    let server = rol_server(InMemoryRolRepository::default());
    let id = create_admin(&server).await;

    let response = server.delete(&format!("/api/Rol/{id}")).await;

    response.assert_status_ok();
    assert!(response.json::<Value>()["message"].is_string());

    server
        .get(&format!("/api/Rol/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rol_delete_missing_is_not_found() {
    let server = rol_server(InMemoryRolRepository::default());

    let response = server.delete("/api/Rol/31").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["details"]["id"], 31);
}

#[tokio::test]
async fn test_rol_soft_delete_and_restore_missing_are_not_found() {
    let server = rol_server(InMemoryRolRepository::default());

    server
        .delete("/api/Rol/softdelete/4")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .patch("/api/Rol/restore/4")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
