//! Error types for NPV calculations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NpvError>;

/// Failures raised by the value objects, the engine and the mapping layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NpvError {
    /// Malformed input: bad bounds, non-positive increment, empty cash flows,
    /// negative period, missing currency
    #[error("{0}")]
    InvalidArgument(String),

    /// A required request field was absent
    #[error("{0}")]
    MissingArgument(&'static str),

    #[error("Cannot add money with different currencies ({left} and {right})")]
    IncompatibleCurrency { left: String, right: String },

    /// Decimal overflow or division by a zero discount factor
    #[error("Arithmetic failure: {0}")]
    Arithmetic(String),
}

impl NpvError {
    pub fn invalid(message: impl Into<String>) -> Self {
        NpvError::InvalidArgument(message.into())
    }

    /// True when the caller sent bad input (400-class), false when the
    /// failure points at inconsistent internal state (500-class)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            NpvError::InvalidArgument(_) | NpvError::MissingArgument(_)
        )
    }
}
