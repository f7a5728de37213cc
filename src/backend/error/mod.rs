//! Backend Error Module
//!
//! This module defines the error type used by HTTP handlers and services.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and response details
//! └── conversion.rs - IntoResponse and extractor rejection conversions
//! ```
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`, so handlers return
//! `Result<_, BackendError>` and use `?` throughout. The body is always
//! `{"detail": ..., "status": ...}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{
    is_unique_violation, BackendError, DUPLICATE_NAME_DETAIL, INVALID_CREDENTIALS_DETAIL,
    INVALID_TOKEN_DETAIL, METHOD_NOT_ALLOWED_DETAIL, POKEMON_NOT_FOUND_DETAIL,
};

/// Result alias for backend operations
pub type BackendResult<T> = Result<T, BackendError>;
