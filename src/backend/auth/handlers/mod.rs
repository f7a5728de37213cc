//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── login.rs    - POST /token
//! └── me.rs       - GET /users/me
//! ```

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use types::{LoginRequest, TokenResponse, UserResponse};

pub use login::{login, LoginForm};
pub use me::get_me;
