//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials (wrong password or unknown email).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account with this email already exists.
    #[error("account already exists")]
    AccountExists,

    /// The session refers to an account that no longer exists.
    #[error("account not found")]
    AccountNotFound,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
