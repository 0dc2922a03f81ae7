//! BingX perpetual-swap REST API client.
//!
//! This crate provides a typed client for the BingX swap trading API with:
//!
//! - **Request signing**: canonical sorted query strings signed with
//!   HMAC-SHA256, the API key attached via the `X-BX-APIKEY` header
//! - **Time synchronization**: adjusts for clock skew between local and
//!   server time
//! - **Order management**: place market/limit orders (with leverage
//!   configured first), cancel orders, create TP/SL trigger orders, query
//!   order details
//! - **Position management**: set leverage, close a fraction of an open
//!   position
//! - **Error handling**: typed errors; exchange failures keep the original
//!   `code` and `msg` verbatim
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::ApiCredentials;
//! use bingx_rest::BingxRestClient;
//! use execution_core::{OrderSide, PositionSide};
//!
//! // Load credentials from environment
//! let credentials = ApiCredentials::from_env()?;
//! let client = BingxRestClient::new(credentials)?;
//!
//! // Sync time with the BingX server
//! client.sync_time().await?;
//!
//! // Place a market order (sets 5x leverage first)
//! let placed = client.place_market_order(
//!     "BTC-USDT",
//!     5,
//!     OrderSide::Buy,
//!     dec!(0.001),
//!     PositionSide::Long,
//!     None,
//! ).await?;
//! println!("order {} at {}x", placed.order.order_id, placed.leverage.leverage);
//! ```

mod client;
mod error;
mod responses;

pub use client::BingxRestClient;
pub use error::BingxRestError;
pub use responses::{
    ApiEnvelope, LeverageData, NewOrderData, OrderAck, OrderDetails, OrderQueryData, PlacedOrder,
    Position, ServerTimeData,
};
