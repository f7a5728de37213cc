/**
 * Login Handler
 *
 * This module implements `POST /token`.
 *
 * # Authentication Process
 *
 * 1. Read `username` / `password` from the OAuth2 password form (or JSON)
 * 2. Look up the user by login
 * 3. Verify the password against the stored bcrypt hash
 * 4. Issue a signed access token for the login
 *
 * # Security
 *
 * - Unknown login and wrong password return the same 401 with
 *   `WWW-Authenticate: Bearer`, after the same amount of bcrypt work
 * - Passwords are never logged or returned
 */

use axum::{
    extract::{FromRequest, Request, State},
    http::header::CONTENT_TYPE,
    response::Json,
    Form,
};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::password::verify_login;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::get_user_by_login;
use crate::backend::error::BackendError;

/// Credentials extractor
///
/// Reads a JSON body when the request says `application/json`, and an
/// urlencoded form otherwise.
#[derive(Debug)]
pub struct LoginForm(pub LoginRequest);

impl<S> FromRequest<S> for LoginForm
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("application/json"))
            .unwrap_or(false);

        if is_json {
            let Json(request) = Json::<LoginRequest>::from_request(req, state).await?;
            Ok(Self(request))
        } else {
            let Form(request) = Form::<LoginRequest>::from_request(req, state).await?;
            Ok(Self(request))
        }
    }
}

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - Unknown login or wrong password
/// * `422 Unprocessable Entity` - Body missing `username` or `password`
/// * `500 Internal Server Error` - Store or token encoding failure
///
/// # Example Request
///
/// ```http
/// POST /token HTTP/1.1
/// Content-Type: application/x-www-form-urlencoded
///
/// username=alice&password=secret
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "token_type": "bearer"
/// }
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    State(tokens): State<TokenService>,
    LoginForm(request): LoginForm,
) -> Result<Json<TokenResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.username);

    let user = get_user_by_login(&pool, &request.username).await?;
    let stored_hash = user.as_ref().map(|u| u.password_hash.as_str());
    let verified = verify_login(&request.password, stored_hash).await?;

    let user = match user {
        Some(user) if verified => user,
        Some(_) => {
            tracing::warn!("Login failed, wrong password for: {}", request.username);
            return Err(BackendError::invalid_credentials());
        }
        None => {
            tracing::warn!("Login failed, unknown user: {}", request.username);
            return Err(BackendError::invalid_credentials());
        }
    };

    let token = tokens.issue(&user.login).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::internal("failed to issue token")
    })?;

    tracing::info!("User logged in successfully: {}", user.login);

    Ok(Json(TokenResponse::bearer(token)))
}
