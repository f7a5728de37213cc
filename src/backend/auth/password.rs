//! Password hashing and verification (bcrypt).
//!
//! Request paths call the async entry points ([`verify_login`],
//! [`hash_password_blocking`]), which run bcrypt on tokio's blocking pool.

use std::sync::OnceLock;

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::backend::error::BackendError;

async fn run_blocking<T, F>(work: F) -> Result<T, BackendError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        tracing::error!("Password task failed: {}", e);
        BackendError::internal("password task failed")
    })
}

/// Check a login attempt off the async runtime.
///
/// `stored_hash` is `None` when the login does not exist; the same bcrypt
/// work is still done and the result is `false`.
pub async fn verify_login(
    plaintext: &str,
    stored_hash: Option<&str>,
) -> Result<bool, BackendError> {
    let plaintext = plaintext.to_owned();
    let stored_hash = stored_hash.map(str::to_owned);

    run_blocking(move || match stored_hash {
        Some(stored_hash) => verify_password(&plaintext, &stored_hash),
        None => verify_unknown_user(&plaintext),
    })
    .await
}

/// Hash a password with the default cost off the async runtime.
pub async fn hash_password_blocking(plaintext: &str) -> Result<String, BackendError> {
    let plaintext = plaintext.to_owned();

    run_blocking(move || hash_password(&plaintext))
        .await?
        .map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            BackendError::internal("password hashing failed")
        })
}

/// Check `plaintext` against a stored bcrypt hash.
///
/// A malformed hash counts as a mismatch; callers turn `false` into an
/// authentication error.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    match verify(plaintext, stored_hash) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::warn!("Stored password hash could not be verified: {}", e);
            false
        }
    }
}

/// Burn the same bcrypt work as a real check, for logins that do not exist.
///
/// Keeps "unknown login" and "wrong password" indistinguishable by timing.
/// Always returns `false`.
pub fn verify_unknown_user(plaintext: &str) -> bool {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

    if let Some(dummy) = DUMMY_HASH.get_or_init(|| hash_password("pokedex-dummy-password").ok()) {
        let _ = verify(plaintext, dummy);
    }
    false
}

/// Hash a password with bcrypt's default cost.
pub fn hash_password(plaintext: &str) -> Result<String, bcrypt::BcryptError> {
    hash(plaintext, DEFAULT_COST)
}

/// Hash a password with an explicit cost. Tests use the minimum cost.
pub fn hash_password_with_cost(plaintext: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(plaintext, cost)
}
