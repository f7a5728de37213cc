//! Authentication API integration tests
//!
//! Tests for `POST /token`, `GET /users/me` and bearer token handling on the
//! protected routes.

#[macro_use]
mod common;

use std::time::Instant;

use axum::http::{header, HeaderValue, StatusCode};
use chrono::Duration;
use common::*;
use pokedex::backend::auth::password::hash_password;
use pokedex::backend::auth::users::create_user;
use pokedex::backend::auth::{TokenResponse, TokenService, UserResponse};
use pokedex::backend::error::{INVALID_CREDENTIALS_DETAIL, INVALID_TOKEN_DETAIL};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_login_success_with_form() {
    let db = TestDatabase::new().await;
    let server = db.server();
    create_test_user(db.pool(), "ash", "pikachu123").await;

    let response = server
        .post("/token")
        .form(&[("username", "ash"), ("password", "pikachu123")])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: TokenResponse = response.json();
    assert_eq!(body.token_type, "bearer");
    assert!(!body.access_token.is_empty());
}

#[tokio::test]
async fn test_login_success_with_json() {
    let db = TestDatabase::new().await;
    let server = db.server();
    create_test_user(db.pool(), "ash", "pikachu123").await;

    let response = server
        .post("/token")
        .json(&serde_json::json!({ "username": "ash", "password": "pikachu123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: TokenResponse = response.json();
    assert_eq!(db.tokens().validate(&body.access_token).unwrap(), "ash");
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_are_identical() {
    let db = TestDatabase::new().await;
    let server = db.server();
    create_test_user(db.pool(), "ash", "pikachu123").await;

    let wrong_password = server
        .post("/token")
        .form(&[("username", "ash"), ("password", "charmander")])
        .await;
    let unknown_user = server
        .post("/token")
        .form(&[("username", "misty"), ("password", "pikachu123")])
        .await;

    assert_unauthorized!(wrong_password);
    assert_unauthorized!(unknown_user);
    assert_error_response!(wrong_password, StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS_DETAIL);
    assert_error_response!(unknown_user, StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS_DETAIL);
    assert_eq!(wrong_password.text(), unknown_user.text());
}

#[tokio::test]
async fn test_login_missing_fields_is_validation_error() {
    let db = TestDatabase::new().await;
    let server = db.server();

    let response = server.post("/token").form(&[("username", "ash")]).await;

    assert_error_response!(response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_tokens_for_same_user_differ() {
    let db = TestDatabase::new().await;
    let server = db.server();
    create_test_user(db.pool(), "ash", "pikachu123").await;

    let first = login(&server, "ash", "pikachu123").await;
    let second = login(&server, "ash", "pikachu123").await;

    assert_ne!(first, second);
}

#[tokio::test]
async fn test_get_me() {
    let db = TestDatabase::new().await;
    let server = db.server();
    let (user, token) = create_logged_in_user(db.pool(), &server, "ash").await;

    let response = server
        .get("/users/me")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: UserResponse = response.json();
    assert_eq!(
        body,
        UserResponse {
            id: user.id,
            login: "ash".to_string()
        }
    );

    let raw: serde_json::Value = response.json();
    assert!(raw.get("senha_hash").is_none());
    assert!(raw.get("password_hash").is_none());
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let db = TestDatabase::new().await;
    let server = db.server();

    assert_unauthorized!(server.get("/users/me").await);
    assert_unauthorized!(server.get("/pokemons-list").await);
    assert_unauthorized!(server.get("/pokemons/1").await);
    assert_unauthorized!(server.delete("/pokemons/1").await);
    assert_unauthorized!(
        server
            .post("/pokemons")
            .json(&serde_json::json!({
                "nome": "Pikachu",
                "tipo": "Electric",
                "habilidades": ["Thunder Shock"]
            }))
            .await
    );
    assert_eq!(db.pokemon_count().await, 0);
}

#[tokio::test]
async fn test_auth_checked_before_payload() {
    let db = TestDatabase::new().await;
    let server = db.server();

    // Invalid body and id, but the missing token wins
    let response = server.put("/pokemons/not-a-number").text("garbage").await;

    assert_unauthorized!(response);
}

#[tokio::test]
async fn test_rejects_non_bearer_scheme() {
    let db = TestDatabase::new().await;
    let server = db.server();
    let (_, token) = create_logged_in_user(db.pool(), &server, "ash").await;

    let response = server
        .get("/users/me")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Basic {}", token)).unwrap(),
        )
        .await;

    assert_unauthorized!(response);
}

#[tokio::test]
async fn test_rejects_tampered_token() {
    let db = TestDatabase::new().await;
    let server = db.server();
    let (_, token) = create_logged_in_user(db.pool(), &server, "ash").await;
    create_test_user(db.pool(), "misty", "starmie123").await;
    let other = db.tokens().issue("misty").unwrap();

    // Claims of misty under the signature issued for ash
    let ash_parts: Vec<&str> = token.split('.').collect();
    let misty_parts: Vec<&str> = other.split('.').collect();
    let tampered = format!("{}.{}.{}", ash_parts[0], misty_parts[1], ash_parts[2]);

    let response = server
        .get("/users/me")
        .add_header(header::AUTHORIZATION, bearer(&tampered))
        .await;

    assert_unauthorized!(response);
    assert_error_response!(response, StatusCode::UNAUTHORIZED, INVALID_TOKEN_DETAIL);
}

#[tokio::test]
async fn test_rejects_token_signed_with_other_key() {
    let db = TestDatabase::new().await;
    let server = db.server();
    create_test_user(db.pool(), "ash", "pikachu123").await;

    let foreign = TokenService::new("some-other-secret", Duration::minutes(30))
        .issue("ash")
        .unwrap();

    let response = server
        .get("/users/me")
        .add_header(header::AUTHORIZATION, bearer(&foreign))
        .await;

    assert_unauthorized!(response);
}

#[tokio::test]
async fn test_rejects_expired_token() {
    let db = TestDatabase::new().await;
    let server = db.server();
    create_test_user(db.pool(), "ash", "pikachu123").await;

    let expired = db
        .tokens()
        .issue_with_ttl("ash", Duration::seconds(-60))
        .unwrap();

    let response = server
        .get("/users/me")
        .add_header(header::AUTHORIZATION, bearer(&expired))
        .await;

    assert_unauthorized!(response);
}

#[tokio::test]
async fn test_rejects_token_for_deleted_user() {
    let db = TestDatabase::new().await;
    let server = db.server();
    let (_, token) = create_logged_in_user(db.pool(), &server, "ash").await;

    sqlx::query("DELETE FROM usuarios WHERE login = ?1")
        .bind("ash")
        .execute(db.pool())
        .await
        .unwrap();

    let response = server
        .get("/users/me")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;

    assert_unauthorized!(response);
}

#[tokio::test]
async fn test_login_does_not_stall_other_requests() {
    let db = TestDatabase::new().await;
    let server = db.server();

    // Production cost, so the check takes long enough to observe
    let password_hash = hash_password("pikachu123").unwrap();
    create_user(db.pool(), "ash", &password_hash).await.unwrap();

    let login_request = async {
        let response = server
            .post("/token")
            .form(&[("username", "ash"), ("password", "pikachu123")])
            .await;
        (response, Instant::now())
    };
    let health_request = async {
        let response = server.get("/health").await;
        (response, Instant::now())
    };

    let ((login_response, login_done), (health_response, health_done)) =
        tokio::join!(login_request, health_request);

    assert_eq!(login_response.status_code(), StatusCode::OK);
    assert_eq!(health_response.status_code(), StatusCode::OK);
    assert!(
        health_done < login_done,
        "health check waited for the password check"
    );
}
