use thiserror::Error;

use crate::store::StoreError;
use crate::validate::ValidationErrors;

/// Error type that captures prediction pipeline failures.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// A malformed request reached the engine despite external validation.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The summary reducer was handed zero months. The engine guarantees at
    /// least one month for any accepted request, so this is a programming
    /// error at the call site.
    #[error("summary requires at least one calculated month")]
    EmptyMonths,
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Store(#[from] StoreError),
}
