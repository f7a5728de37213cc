/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits used by Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the two process-wide services every request may need:
 * - the SQLite connection pool (record and credential store)
 * - the token service (signing key and token lifetime)
 *
 * Both are cheap to clone and safe to share across tasks, so the state is
 * cloned into each request rather than wrapped in a lock.
 *
 * # Example
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     let _conn = pool.acquire().await;
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenService;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the `usuarios` and `pokemons` tables
    pub db_pool: SqlitePool,
    /// Access token issuance and validation
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, tokens: TokenService) -> Self {
        Self { db_pool, tokens }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
