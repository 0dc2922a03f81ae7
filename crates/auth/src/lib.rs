//! Authentication and signing for the BingX API.
//!
//! This crate provides secure credential management and request signing
//! for authenticated calls to the BingX perpetual-swap REST API.
//!
//! # Features
//!
//! - **Secure Credentials**: API secrets are wrapped in `SecretString` to prevent
//!   accidental logging and ensure memory is zeroed on drop.
//! - **Canonical Queries**: Parameters are sorted byte-wise and the request
//!   timestamp is appended last, exactly as BingX expects the signed payload.
//! - **HMAC-SHA256 Signing**: Lowercase hex digest over the canonical query.
//! - **Environment Loading**: Credentials can be loaded from environment variables
//!   or a `.env` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, RequestSigner};
//!
//! // Load credentials from environment
//! let credentials = ApiCredentials::from_env()?;
//!
//! // Create a signer
//! let signer = RequestSigner::new(&credentials);
//!
//! // Sign a query string
//! let params = [("symbol", "BTC-USDT"), ("side", "BUY")];
//! let signed_query = signer.sign_params(&params, timestamp_ms);
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::ApiCredentials;
pub use error::AuthError;
pub use signer::RequestSigner;
