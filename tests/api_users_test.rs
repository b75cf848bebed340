//! User endpoint integration tests: list, create, and the failure paths
//! (malformed payloads, duplicate emails).

mod common;

use axum::http::StatusCode;
use pizzetta::shared::User;
use pretty_assertions::assert_eq;

use common::{memory_pool, test_server};

#[tokio::test]
async fn list_users_empty_database_returns_empty_array() {
    let pool = memory_pool().await;
    let server = test_server(pool);

    let body: Vec<User> = server.get("/api/users").await.json();
    assert!(body.is_empty());
}

#[tokio::test]
async fn create_returns_the_stored_record() {
    let pool = memory_pool().await;
    let server = test_server(pool);

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({
            "full_name": "Mario Rossi",
            "email": "mario@example.com",
            "password": "secret",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let user: User = response.json();
    assert!(user.id > 0);
    assert_eq!(user.email, "mario@example.com");
    assert_eq!(user.role, "USER");
    assert!(user.verified.is_none());
}

#[tokio::test]
async fn created_user_shows_up_in_the_list() {
    let pool = memory_pool().await;
    let server = test_server(pool);

    server
        .post("/api/users")
        .json(&serde_json::json!({
            "full_name": "Mario Rossi",
            "email": "mario@example.com",
            "password": "secret",
        }))
        .await;

    let users: Vec<User> = server.get("/api/users").await.json();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].full_name, "Mario Rossi");
    assert_eq!(users[0].email, "mario@example.com");
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let pool = memory_pool().await;
    let server = test_server(pool);

    let payload = serde_json::json!({
        "full_name": "Mario Rossi",
        "email": "mario@example.com",
        "password": "secret",
    });

    let first = server.post("/api/users").json(&payload).await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let second = server.post("/api/users").json(&payload).await;
    assert_eq!(second.status_code(), StatusCode::CONFLICT);

    // The failed create left no partial write behind
    let users: Vec<User> = server.get("/api/users").await.json();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let pool = memory_pool().await;
    let server = test_server(pool);

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({ "email": "missing-everything@example.com" }))
        .await;

    assert!(response.status_code().is_client_error());
}
