//! User CRUD API integration tests

#![cfg(feature = "ssr")]

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use authdesk::shared::{PublicUser, UserRole};
use common::{authorized, spawn_app, ADMIN_EMAIL};

fn jane() -> Value {
    json!({
        "email": "Jane@Example.com",
        "firstName": " Jane ",
        "lastName": "Doe",
        "password": "secret1"
    })
}

#[tokio::test]
async fn test_users_require_token() {
    let app = spawn_app();
    app.server.get("/users").await.assert_status(StatusCode::UNAUTHORIZED);
    app.server
        .post("/users")
        .json(&jane())
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    app.server
        .delete("/users/1")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_contains_seeded_admin() {
    let app = spawn_app();
    let token = app.admin_token().await;

    let users: Vec<PublicUser> = authorized(app.server.get("/users"), &token).await.json();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, ADMIN_EMAIL);
}

#[tokio::test]
async fn test_create_user_defaults() {
    let app = spawn_app();
    let token = app.admin_token().await;

    let response = authorized(app.server.post("/users"), &token).json(&jane()).await;
    response.assert_status(StatusCode::CREATED);

    let user: PublicUser = response.json();
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.first_name, "Jane");
    assert_eq!(user.role, UserRole::User);
    assert!(user.is_active);

    let login = app.login("jane@example.com", "secret1").await;
    assert_eq!(login.user.id, user.id);
}

#[tokio::test]
async fn test_create_admin_user() {
    let app = spawn_app();
    let token = app.admin_token().await;

    let user: PublicUser = authorized(app.server.post("/users"), &token)
        .json(&json!({
            "email": "ops@example.com",
            "firstName": "Ops",
            "lastName": "Team",
            "password": "secret1",
            "role": "admin",
            "isActive": false
        }))
        .await
        .json();
    assert_eq!(user.role, UserRole::Admin);
    assert!(!user.is_active);
}

#[tokio::test]
async fn test_create_duplicate_email() {
    let app = spawn_app();
    let token = app.admin_token().await;

    authorized(app.server.post("/users"), &token)
        .json(&jane())
        .await
        .assert_status(StatusCode::CREATED);

    let response = authorized(app.server.post("/users"), &token)
        .json(&json!({
            "email": "JANE@example.com",
            "firstName": "Other",
            "lastName": "Jane",
            "password": "secret2"
        }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_validation() {
    let app = spawn_app();
    let token = app.admin_token().await;

    let response = authorized(app.server.post("/users"), &token)
        .json(&json!({
            "email": "jane",
            "firstName": "J",
            "lastName": "Doe",
            "password": "123"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["email", "firstName", "password"]);
}

#[tokio::test]
async fn test_get_update_delete_roundtrip() {
    let app = spawn_app();
    let token = app.admin_token().await;

    let created: PublicUser = authorized(app.server.post("/users"), &token)
        .json(&jane())
        .await
        .json();
    let path = format!("/users/{}", created.id);

    let fetched: PublicUser = authorized(app.server.get(&path), &token).await.json();
    assert_eq!(fetched, created);

    let updated: PublicUser = authorized(app.server.patch(&path), &token)
        .json(&json!({ "lastName": "Smith", "role": "admin" }))
        .await
        .json();
    assert_eq!(updated.last_name, "Smith");
    assert_eq!(updated.role, UserRole::Admin);
    assert_eq!(updated.first_name, "Jane");
    assert!(updated.updated_at >= created.updated_at);

    authorized(app.server.delete(&path), &token)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    authorized(app.server.get(&path), &token)
        .await
        .assert_status(StatusCode::NOT_FOUND);
    authorized(app.server.delete(&path), &token)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_password_changes_login() {
    let app = spawn_app();
    let token = app.admin_token().await;

    let created: PublicUser = authorized(app.server.post("/users"), &token)
        .json(&jane())
        .await
        .json();

    authorized(app.server.patch(&format!("/users/{}", created.id)), &token)
        .json(&json!({ "password": "newsecret" }))
        .await
        .assert_status_ok();

    app.server
        .post("/auth/login")
        .json(&json!({ "email": "jane@example.com", "password": "secret1" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    app.login("jane@example.com", "newsecret").await;
}

#[tokio::test]
async fn test_update_to_taken_email() {
    let app = spawn_app();
    let token = app.admin_token().await;

    let created: PublicUser = authorized(app.server.post("/users"), &token)
        .json(&jane())
        .await
        .json();

    authorized(app.server.patch(&format!("/users/{}", created.id)), &token)
        .json(&json!({ "email": ADMIN_EMAIL }))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_missing_user() {
    let app = spawn_app();
    let token = app.admin_token().await;

    authorized(app.server.patch("/users/999"), &token)
        .json(&json!({ "firstName": "Ghost" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_validation() {
    let app = spawn_app();
    let token = app.admin_token().await;

    authorized(app.server.patch("/users/1"), &token)
        .json(&json!({ "password": "123" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_numeric_id_uses_json_error_body() {
    let app = spawn_app();
    let token = app.admin_token().await;

    for response in [
        authorized(app.server.get("/users/abc"), &token).await,
        authorized(app.server.delete("/users/abc"), &token).await,
        authorized(app.server.patch("/users/abc"), &token)
            .json(&json!({ "firstName": "Ghost" }))
            .await,
    ] {
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["status"], 400);
        assert_eq!(body["fields"][0]["field"], "id");
        assert!(body["error"].as_str().unwrap().contains("abc"));
    }
}
