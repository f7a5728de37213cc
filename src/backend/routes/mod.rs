//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and layers
//! ├── api_routes.rs   - Route table
//! └── health.rs       - Health check handler
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use pokedex::backend::auth::TokenService;
//! use pokedex::backend::routes::create_router;
//! use pokedex::backend::server::state::AppState;
//!
//! # async fn example(pool: sqlx::SqlitePool) {
//! let tokens = TokenService::new("secret", chrono::Duration::minutes(30));
//! let router = create_router(AppState::new(pool, tokens));
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint table
pub mod api_routes;

/// Health check
pub mod health;

pub use router::create_router;
