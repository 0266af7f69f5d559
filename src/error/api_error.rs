use thiserror::Error;

use super::{AuthError, ClientError, ValidationError};

/// Top-level error type returned by every operation.
///
/// Each variant wraps one layer of the taxonomy so callers can match on
/// the class of failure without losing the underlying detail.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failures and non-success HTTP statuses.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Missing or rejected credentials.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Local parameter validation and response decoding failures.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
