//! Shared Module
//!
//! This module contains types and data structures that do not depend on the
//! server stack: request/response bodies, the habilidades codec, validation
//! errors and application configuration. The backend, the admin tooling and
//! the integration tests all build on these.

/// Pokemon bodies and the habilidades codec
pub mod pokemon;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use pokemon::{
    decode_habilidades, encode_habilidades, validate_habilidades, Pokemon, PokemonCreate,
};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
