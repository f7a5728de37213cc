//! Database test fixtures and utilities
//!
//! Each fixture owns a fresh SQLite file in its own temporary directory, so
//! tests never share state and need no cleanup.

use axum_test::TestServer;
use pokedex::backend::auth::TokenService;
use pokedex::backend::routes::create_router;
use pokedex::backend::server::config::load_database;
use pokedex::backend::server::AppState;
use pokedex::shared::AppConfig;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Signing secret used by every test fixture
pub const TEST_JWT_SECRET: &str = "pokedex-test-secret";

/// Test database fixture
pub struct TestDatabase {
    // Held so the directory outlives the pool
    _dir: TempDir,
    config: AppConfig,
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a migrated database in a fresh temporary directory
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("pokedex_test.db");

        let config = AppConfig::builder()
            .database_url(format!("sqlite://{}", path.display()))
            .jwt_secret(TEST_JWT_SECRET)
            .token_ttl_minutes(30)
            .build()
            .expect("Failed to build test config");

        let pool = load_database(&config)
            .await
            .expect("Failed to open test database");

        Self {
            _dir: dir,
            config,
            pool,
        }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the configuration pointing at this database
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Token service sharing the fixture's secret and lifetime
    pub fn tokens(&self) -> TokenService {
        TokenService::from_config(&self.config)
    }

    /// Test server running the full router over this database
    pub fn server(&self) -> TestServer {
        let app = create_router(AppState::new(self.pool.clone(), self.tokens()));
        TestServer::new(app).expect("Failed to start test server")
    }

    /// Number of rows in the `pokemons` table
    pub async fn pokemon_count(&self) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pokemons")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count pokemons");
        count
    }
}
