//! Backend Module
//!
//! This module contains all server-side code for the pokedex API: an Axum
//! HTTP server in front of a SQLite store, guarded by bearer tokens.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database pool
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, password hashing, tokens, auth endpoints
//! - **`middleware`** - Identity resolution (`AuthUser` extractor)
//! - **`pokemon`** - Record store, CRUD service and handlers
//! - **`error`** - Backend error type and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - pokedex-server binary
//! ├── create_user.rs  - create-user binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request extractors
//! ├── pokemon/        - Pokemon CRUD
//! └── error/          - Error types
//! ```
//!
//! # Concurrency
//!
//! Requests are served concurrently. Each one borrows its own connection from
//! the pool. Every write is a single statement, and name uniqueness is left to
//! the store's UNIQUE constraint. Password hashing and verification run on
//! tokio's blocking pool.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; errors become
//! `{"detail": ..., "status": ...}` responses with the matching status code.

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Authentication and user management
#[cfg(feature = "ssr")]
pub mod auth;

/// Request extractors
#[cfg(feature = "ssr")]
pub mod middleware;

/// Pokemon CRUD
#[cfg(feature = "ssr")]
pub mod pokemon;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use server::create_app;
#[cfg(feature = "ssr")]
pub use error::BackendError;
