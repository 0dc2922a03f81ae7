//! Transport-layer error types.

use thiserror::Error;

/// Failures that occur before a usable response body is obtained.
///
/// These are never retried internally; whether to call again is up to
/// the caller.
#[derive(Debug, Error)]
pub enum RestError {
    /// Request timed out before a response arrived.
    #[error("request timed out")]
    Timeout,

    /// Could not reach the host.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Non-success HTTP status, with the raw response body.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, if any.
        body: String,
    },

    /// The server throttled the request (HTTP 429).
    #[error("rate limited by server")]
    RateLimited,

    /// Response body was not valid JSON for the expected type.
    #[error("malformed response: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("client build failed: {0}")]
    ClientBuild(String),
}

impl RestError {
    /// True for failures where a later identical call might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::Connection(_) | Self::RateLimited
        )
    }

    /// True when the server throttled the request.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout;
        }
        if err.is_decode() {
            return Self::Parse(err.to_string());
        }
        match err.status() {
            Some(status) => Self::Status {
                status: status.as_u16(),
                body: err.to_string(),
            },
            None => Self::Connection(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(RestError::Timeout.is_retryable());
        assert!(RestError::Connection("refused".into()).is_retryable());
        assert!(RestError::RateLimited.is_retryable());

        assert!(!RestError::Parse("bad json".into()).is_retryable());
        assert!(!RestError::Status {
            status: 500,
            body: String::new()
        }
        .is_retryable());
    }

    #[test]
    fn test_rate_limited_predicate() {
        assert!(RestError::RateLimited.is_rate_limited());
        assert!(!RestError::Timeout.is_rate_limited());
    }
}
