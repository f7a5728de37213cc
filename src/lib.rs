//! Pokedex - Main Library
//!
//! Pokedex is a small authenticated CRUD backend. Registered users trade their
//! login and password for a short-lived bearer token, then use that token to
//! create, list, read, update and delete pokemon records, each owned by the
//! user that created it.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not need the server stack
//!   - Pokemon request/response bodies and the habilidades codec
//!   - Validation errors
//!   - Application configuration
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routes and error responses
//!   - Password verification, token issuance and identity resolution
//!   - SQLite persistence for users and pokemon
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and both binaries
//!
//! # Usage
//!
//! ```rust,no_run
//! use pokedex::backend::server::init::create_app;
//! use pokedex::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Request Flow
//!
//! 1. `POST /token` verifies the password against the stored bcrypt hash and
//!    issues a signed JWT carrying the login and an expiry.
//! 2. Every other call presents that token as `Authorization: Bearer <token>`.
//! 3. The identity resolver validates the token and loads the user; failure is
//!    a 401 with a `WWW-Authenticate: Bearer` challenge.
//! 4. The pokemon service runs the requested operation against the store.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
