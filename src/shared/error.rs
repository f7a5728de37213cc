//! Shared Error Types
//!
//! This module defines error types that are shared between the API layer and
//! anything else that handles pokedex payloads (tools, tests, clients).
//!
//! # Error Categories
//!
//! - `ValidationError` - Payload validation failures (e.g. habilidades shape)
//!
//! # Usage
//!
//! ```rust
//! use pokedex::shared::error::SharedError;
//!
//! let error = SharedError::validation("habilidades", "at most 3 entries are allowed");
//! ```
use thiserror::Error;

/// Shared error types that can occur wherever pokedex payloads are handled
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
