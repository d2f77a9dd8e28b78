//! Service error types.

use thiserror::Error;

/// Errors returned by data services.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The backing service could not answer.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// The request was cancelled before it completed.
    #[error("request cancelled")]
    Cancelled,
}
