//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Bearer token identity resolution (`AuthUser` extractor)
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::Json;
//! use pokedex::backend::middleware::AuthUser;
//!
//! async fn whoami(AuthUser(user): AuthUser) -> Json<String> {
//!     Json(user.login)
//! }
//! ```

pub mod auth;

pub use auth::{bearer_token, resolve_identity, AuthUser};
