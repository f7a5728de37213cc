/**
 * Server Configuration
 *
 * This module opens the SQLite store named by the application config and
 * brings its schema up to date.
 *
 * # Connection Handling
 *
 * The pool hands one connection to each request; that connection is returned
 * when the request's handle is dropped, on success and on error alike.
 * Foreign keys are switched on for every connection so `pokemons.dono_login`
 * always points at an existing `usuarios.login`.
 *
 * # Error Handling
 *
 * Unlike optional services, the store is required: a connection or migration
 * failure aborts startup.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::shared::AppConfig;

/// Open the connection pool for `config.database_url` and run migrations
///
/// The database file is created when it does not exist yet.
///
/// # Example
///
/// ```rust,no_run
/// use pokedex::backend::server::config::load_database;
/// use pokedex::shared::AppConfig;
///
/// # async fn run() -> Result<(), sqlx::Error> {
/// let config = AppConfig::from_env().expect("config");
/// let pool = load_database(&config).await?;
/// # drop(pool);
/// # Ok(())
/// # }
/// ```
pub async fn load_database(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Open a private in-memory store with the schema applied
///
/// A single connection that never expires keeps the memory database alive for
/// the life of the pool.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
