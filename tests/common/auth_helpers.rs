//! Authentication test helpers
//!
//! Provides utilities for creating test users, logging them in and building
//! `Authorization` headers.

use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use pokedex::backend::auth::password::hash_password_with_cost;
use pokedex::backend::auth::users::create_user;
use pokedex::backend::auth::TokenResponse;
use sqlx::SqlitePool;

/// Lowest bcrypt cost, keeps the suite fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub login: String,
    pub password: String,
}

/// Create a test user in the database
pub async fn create_test_user(pool: &SqlitePool, login: &str, password: &str) -> TestUser {
    let password_hash =
        hash_password_with_cost(password, TEST_BCRYPT_COST).expect("Failed to hash password");

    let user = create_user(pool, login, &password_hash)
        .await
        .expect("Failed to create test user");

    TestUser {
        id: user.id,
        login: user.login,
        password: password.to_string(),
    }
}

/// Log in through `POST /token` with the OAuth2 password form
pub async fn login(server: &TestServer, login: &str, password: &str) -> String {
    let response = server
        .post("/token")
        .form(&[("username", login), ("password", password)])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK, "login failed for {}", login);
    response.json::<TokenResponse>().access_token
}

/// Create a user and return a valid token for it
pub async fn create_logged_in_user(
    pool: &SqlitePool,
    server: &TestServer,
    user_login: &str,
) -> (TestUser, String) {
    let user = create_test_user(pool, user_login, "password123").await;
    let token = login(server, &user.login, &user.password).await;
    (user, token)
}

/// Value of an `Authorization: Bearer <token>` header
pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("Invalid header value")
}
