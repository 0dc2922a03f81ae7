//! Secure API credential management.
//!
//! The secret key is only ever fed into the HMAC signer; it is never part
//! of a URL, a header, or a log line. Wrapping it in `SecretString` keeps
//! accidental `Debug`/`Display` printing from leaking it and zeroes the
//! memory on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the API key.
const ENV_API_KEY: &str = "BINGX_API_KEY";
/// Environment variable holding the signing secret.
const ENV_SECRET_KEY: &str = "BINGX_SECRET_KEY";

/// Immutable API key/secret pair for authenticated requests.
///
/// Fixed at client construction; the key travels in the `X-BX-APIKEY`
/// header while the secret stays local to signing.
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    secret_key: SecretString,
}

impl ApiCredentials {
    /// Load credentials from `BINGX_API_KEY` / `BINGX_SECRET_KEY`.
    ///
    /// A `.env` file in the working directory is honored when present.
    ///
    /// # Errors
    /// Returns `AuthError::MissingEnvVar` naming the first variable that
    /// is not set.
    pub fn from_env() -> Result<Self, AuthError> {
        dotenvy::dotenv().ok();

        Ok(Self::new(
            require_env(ENV_API_KEY)?,
            require_env(ENV_SECRET_KEY)?,
        ))
    }

    /// Create credentials from explicit values.
    ///
    /// Useful for testing or when credentials come from other sources.
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key,
            secret_key: SecretString::from(secret_key),
        }
    }

    /// Get the API key (public, safe to log).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Expose the secret key for signing.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    /// Never log or display the return value.
    pub fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

fn require_env(name: &'static str) -> Result<String, AuthError> {
    std::env::var(name).map_err(|_| AuthError::MissingEnvVar(name.into()))
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_credentials() {
        let creds = ApiCredentials::new("bx-key".into(), "bx-secret".into());
        assert_eq!(creds.api_key(), "bx-key");
        assert_eq!(creds.expose_secret(), "bx-secret");
    }

    #[test]
    fn test_debug_never_shows_secret() {
        let creds = ApiCredentials::new("bx-key".into(), "hunter2".into());
        let printed = format!("{:?}", creds);

        assert!(printed.contains("bx-key"));
        assert!(printed.contains("[REDACTED]"));
        assert!(!printed.contains("hunter2"));
    }
}
