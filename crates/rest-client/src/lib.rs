//! Generic REST client infrastructure.
//!
//! This crate provides a thin wrapper around `reqwest` with:
//!
//! - Consistent error handling via `RestError`
//! - GET, POST, and DELETE with data carried in the query string and
//!   empty request bodies
//! - JSON response deserialization
//! - Header injection for authentication
//! - Rate limit detection
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::RestClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct TimeResponse {
//!     server_time: i64,
//! }
//!
//! let client = RestClient::with_default_timeout("https://open-api.bingx.com")?;
//! let time: TimeResponse = client.get("/openApi/swap/v2/server/time", None, None).await?;
//! ```

mod client;
mod error;

pub use client::RestClient;
pub use error::RestError;
