//! Authentication Module
//!
//! This module handles password verification, access token issuance and the
//! login / current-user endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Credential store (usuarios table)
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - JWT token issuance and validation
//! └── handlers/       - HTTP handlers
//!     ├── types.rs    - Request/response types
//!     ├── login.rs    - POST /token
//!     └── me.rs       - GET /users/me
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: login + password → hash verified → token returned
//! 2. **Any protected call**: token presented → verified → user loaded
//!
//! # Security
//!
//! - Passwords are stored as bcrypt hashes only
//! - Tokens are stateless HS256 JWTs that expire after the configured TTL
//! - Invalid credentials return 401 (no information leakage)

/// Credential store
pub mod users;

/// Password hashing and verification
pub mod password;

/// Access token issuance and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, LoginRequest, TokenResponse, UserResponse};
pub use sessions::{Claims, TokenError, TokenService};
pub use users::User;
