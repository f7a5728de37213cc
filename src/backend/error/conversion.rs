/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses, and axum's own
 * extractor rejections into backend errors so every failure leaves the server
 * in the same shape.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "detail": "Pokémon não encontrado",
 *   "status": 404
 * }
 * ```
 *
 * 401 responses additionally carry `WWW-Authenticate: Bearer`.
 */

use axum::{
    extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Database(err) => tracing::error!("Database error: {:?}", err),
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
            _ => tracing::debug!("Request failed with {}: {}", status, self),
        }

        let body = serde_json::json!({
            "detail": self.message(),
            "status": status.as_u16(),
        });

        let mut response = (status, Json(body)).into_response();
        if self.is_authentication() {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<FormRejection> for BackendError {
    fn from(rejection: FormRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}
