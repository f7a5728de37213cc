/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler and
 * service function in the backend.
 *
 * # Error Categories
 *
 * - `Authentication` - Bad credentials, missing/invalid/expired token (401)
 * - `Validation` - Payload or query shape rejected (422)
 * - `Conflict` - Pokemon name already taken (400)
 * - `NotFound` - No record with the requested id (404)
 * - `MethodNotAllowed` - Known path, unsupported method (405)
 * - `Database` - Store failure (500)
 * - `Internal` - Hashing or token encoding failure (500)
 *
 * Authentication errors always carry a `WWW-Authenticate: Bearer` challenge
 * when rendered (see `conversion.rs`).
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Detail sent on a failed login
pub const INVALID_CREDENTIALS_DETAIL: &str = "Login ou Senha incorretos";

/// Detail sent when a bearer token cannot be resolved to a user
pub const INVALID_TOKEN_DETAIL: &str = "Não foi possível validar as credenciais";

/// Detail sent when a pokemon id does not exist
pub const POKEMON_NOT_FOUND_DETAIL: &str = "Pokémon não encontrado";

/// Detail sent when a pokemon name is already taken
pub const DUPLICATE_NAME_DETAIL: &str = "Já existe um pokémon com este nome";

/// Detail sent when a route exists but not for the request's method
pub const METHOD_NOT_ALLOWED_DETAIL: &str = "Method Not Allowed";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use pokedex::backend::error::BackendError;
///
/// let err = BackendError::not_found("Pokémon não encontrado");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The caller could not be authenticated
    #[error("Authentication error: {message}")]
    Authentication {
        /// Human-readable error message
        message: String,
    },

    /// The request was well-formed HTTP but its content was rejected
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// The request conflicts with existing state
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// The requested resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// The path exists but does not accept the request's method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Unexpected failure that is not the caller's fault
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },

    /// Error from the shared module (payload validation)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The 405 returned by the router's method fallback
    pub fn method_not_allowed() -> Self {
        Self::MethodNotAllowed
    }

    /// The 401 returned for a wrong login or password
    pub fn invalid_credentials() -> Self {
        Self::authentication(INVALID_CREDENTIALS_DETAIL)
    }

    /// The 401 returned when a bearer token does not resolve to a user
    pub fn invalid_token() -> Self {
        Self::authentication(INVALID_TOKEN_DETAIL)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Authentication` - 401 Unauthorized
    /// - `Validation` - 422 Unprocessable Entity
    /// - `Conflict` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `MethodNotAllowed` - 405 Method Not Allowed
    /// - `Database` / `Internal` - 500 Internal Server Error
    /// - `SharedError` - 422 Unprocessable Entity
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Authentication { .. } => StatusCode::UNAUTHORIZED,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Get the message sent to the client
    ///
    /// Store and internal failures are reported generically; their cause is
    /// only logged.
    pub fn message(&self) -> String {
        match self {
            Self::Authentication { message }
            | Self::Validation { message }
            | Self::Conflict { message }
            | Self::NotFound { message } => message.clone(),
            Self::MethodNotAllowed => METHOD_NOT_ALLOWED_DETAIL.to_string(),
            Self::Database(_) | Self::Internal { .. } => "Erro interno do servidor".to_string(),
            Self::SharedError(err) => err.to_string(),
        }
    }

    /// Whether the response must carry a `WWW-Authenticate: Bearer` challenge
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}

/// Whether a store error is a UNIQUE constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
