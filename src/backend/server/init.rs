/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite store and run migrations
 * 2. Build the token service from the configured secret and lifetime
 * 3. Create the router with all routes and layers
 */

use axum::Router;

use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the store cannot be opened or migrated.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing pokedex backend server");

    let db_pool = load_database(config).await?;
    let tokens = TokenService::from_config(config);

    let app = create_router(AppState::new(db_pool, tokens));

    tracing::info!("Router configured");

    Ok(app)
}
