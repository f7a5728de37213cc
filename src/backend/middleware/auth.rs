/**
 * Identity Resolution
 *
 * This module turns the `Authorization: Bearer <token>` header of a request
 * into the authenticated `User`. It is the only authorization gate for the
 * protected routes: handlers that take an [`AuthUser`] argument never run for
 * an unauthenticated caller.
 *
 * Resolution fails with a 401 (and `WWW-Authenticate: Bearer`) when:
 * - the header is missing or is not a bearer credential
 * - the token is malformed, tampered with, signed by another key or expired
 * - the token's subject is no longer in the credential store
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{get_user_by_login, User};
use crate::backend::error::BackendError;

/// Extract the token from an `Authorization` header value
///
/// The scheme is matched case-insensitively, as OAuth2 clients vary.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

/// Resolve the caller from a raw `Authorization` header value
pub async fn resolve_identity(
    pool: &SqlitePool,
    tokens: &TokenService,
    authorization: Option<&str>,
) -> Result<User, BackendError> {
    let header_value = authorization.ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        BackendError::invalid_token()
    })?;

    let token = bearer_token(header_value).ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::invalid_token()
    })?;

    let login = tokens.validate(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::invalid_token()
    })?;

    get_user_by_login(pool, &login).await?.ok_or_else(|| {
        tracing::warn!("Token subject no longer exists: {}", login);
        BackendError::invalid_token()
    })
}

/// Axum extractor for the authenticated user
///
/// Put it in a handler's arguments to require a valid bearer token.
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    SqlitePool: FromRef<S>,
    TokenService: FromRef<S>,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = SqlitePool::from_ref(state);
        let tokens = TokenService::from_ref(state);
        let authorization = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let user = resolve_identity(&pool, &tokens, authorization).await?;
        tracing::debug!("Resolved caller: {}", user.login);

        Ok(AuthUser(user))
    }
}
