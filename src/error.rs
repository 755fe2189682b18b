//! Error types for smm-money

use thiserror::Error;

/// Errors raised at the rate-fetch boundary.
///
/// Conversion, formatting and reconciliation are infallible by design and
/// never produce these; only the backend client and payload decoding do.
#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Rate fetch failed: {0}")]
    RateFetch(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type alias for smm-money operations
pub type Result<T> = std::result::Result<T, MoneyError>;
