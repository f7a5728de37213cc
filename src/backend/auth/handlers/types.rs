/**
 * Authentication Handler Types
 *
 * This module defines the request and response bodies used by the login and
 * current-user handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Login request
///
/// Accepted as an OAuth2 password form or as JSON with the same fields.
#[derive(Deserialize, Serialize)]
pub struct LoginRequest {
    /// The user's login
    pub username: String,
    /// The user's password (verified against the stored hash, never logged)
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token response
///
/// Returned by `POST /token`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    /// Signed bearer token
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
}

impl TokenResponse {
    /// Wrap a freshly issued token
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// User response (without sensitive data)
///
/// Returned by `GET /users/me`. Never includes the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    /// User's id
    pub id: i64,
    /// User's login
    pub login: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            login: user.login,
        }
    }
}
