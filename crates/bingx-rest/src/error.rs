//! BingX REST API error types.

use auth::AuthError;
use rest_client::RestError;
use thiserror::Error;

/// Errors that can occur when interacting with the BingX REST API.
///
/// Exchange errors keep the original `code` and `msg` verbatim so callers
/// can branch on exchange-specific codes.
#[derive(Debug, Error)]
pub enum BingxRestError {
    /// REST client error (network, timeout, etc.).
    #[error("REST client error: {0}")]
    Rest(#[from] RestError),

    /// Authentication error.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// BingX API error (envelope `code != 0`).
    #[error("BingX API error {code}: {message}")]
    Api {
        /// BingX error code.
        code: i64,
        /// Error message.
        message: String,
    },

    /// Invalid order parameters; raised before any network call.
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// No open position exists for the symbol.
    #[error("No open position for {symbol}")]
    NoOpenPosition {
        /// Contract symbol that was queried.
        symbol: String,
    },

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl BingxRestError {
    /// The exchange error code, when this is an API error.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Check if this error indicates the operation could be retried.
    ///
    /// The client itself never retries; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Rest(rest_err) => rest_err.is_retryable(),
            _ => false,
        }
    }
}
