//! Health check endpoint.

use axum::{extract::State, Json};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::backend::error::BackendError;

/// Body of `GET /health`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check handler.
///
/// Answers only after a round-trip to the store, so a 200 means requests can
/// be served. A store failure surfaces as a 500.
pub async fn health_check(
    State(pool): State<SqlitePool>,
) -> Result<Json<HealthResponse>, BackendError> {
    sqlx::query("SELECT 1").execute(&pool).await?;
    Ok(Json(HealthResponse { status: "ok" }))
}
