//! Handler tests for Users domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Unlike E2E tests, these test ONLY the users domain handlers,
//! not the full application with routing, middleware, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> axum::Router {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    handlers::router(service)
}

async fn seed_user(service: &UserService<InMemoryUserRepository>) -> User {
    service
        .create_user(CreateUser {
            firstname: "John".to_string(),
            lastname: "Doe".to_string(),
            email: "johndoe@email.com".to_string(),
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_user_handler_returns_201() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "firstname": "John",
                "lastname": "Doe",
                "email": "johndoe@email.com"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let user: User = json_body(response.into_body()).await;
    assert_eq!(user.id, 1);
    assert_eq!(user.firstname, "John");
    assert_eq!(user.email, "johndoe@email.com");
}

#[tokio::test]
async fn test_list_users_handler_returns_all_rows() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    seed_user(&service).await;
    service
        .create_user(CreateUser {
            firstname: "Jane".to_string(),
            lastname: "Doe".to_string(),
            email: "janedoe@email.com".to_string(),
        })
        .await
        .unwrap();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let users: Vec<User> = json_body(response.into_body()).await;
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn test_get_user_handler_returns_200() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    let created = seed_user(&service).await;

    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let user: User = json_body(response.into_body()).await;
    assert_eq!(user, created);
}

#[tokio::test]
async fn test_get_user_handler_returns_404_for_missing() {
    let request = Request::builder()
        .method("GET")
        .uri("/999")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_user_handler_returns_400_for_non_numeric_id() {
    let request = Request::builder()
        .method("GET")
        .uri("/abc")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_user_handler_merges_fields() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    let created = seed_user(&service).await;

    let app = handlers::router(service);

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", created.id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"firstname": "Jane"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let user: User = json_body(response.into_body()).await;
    assert_eq!(user.firstname, "Jane");
    assert_eq!(user.lastname, "Doe");
    assert_eq!(user.email, "johndoe@email.com");
}

#[tokio::test]
async fn test_patch_user_handler_merges_fields() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    let created = seed_user(&service).await;

    let app = handlers::router(service);

    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/{}", created.id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"email": "new@email.com"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let user: User = json_body(response.into_body()).await;
    assert_eq!(user.email, "new@email.com");
    assert_eq!(user.firstname, "John");
}

#[tokio::test]
async fn test_update_user_handler_returns_404_for_missing() {
    let request = Request::builder()
        .method("PUT")
        .uri("/999")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"firstname": "Jane"})).unwrap(),
        ))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_handler_returns_204() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    let created = seed_user(&service).await;

    let app = handlers::router(service);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_user_handler_returns_404_for_missing() {
    let request = Request::builder()
        .method("DELETE")
        .uri("/999")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_user_handler_rejects_malformed_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
