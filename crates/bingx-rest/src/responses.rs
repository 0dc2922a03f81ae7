//! BingX API response types.
//!
//! Every endpoint wraps its payload in the uniform `{code, msg, data}`
//! envelope; quantities and prices arrive as decimal strings (occasionally
//! bare numbers) and are parsed into `Decimal`.

use crate::error::BingxRestError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Uniform BingX response envelope.
///
/// `code == 0` signals success; anything else is a domain-level failure
/// carrying an exchange-specific message.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the `data` payload, turning a non-zero `code` into an error.
    pub fn into_data(self) -> Result<T, BingxRestError> {
        if self.code != 0 {
            return Err(BingxRestError::Api {
                code: self.code,
                message: self.msg,
            });
        }

        self.data
            .ok_or_else(|| BingxRestError::Parse("response envelope missing data".into()))
    }
}

/// Response data from GET /openApi/swap/v2/server/time.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerTimeData {
    #[serde(rename = "serverTime")]
    pub server_time: i64,
}

/// Leverage configuration data from POST /openApi/swap/v2/trade/leverage.
#[derive(Debug, Clone, Deserialize)]
pub struct LeverageData {
    pub leverage: u32,
    #[serde(default)]
    pub symbol: String,
}

/// Order acknowledgement nested under `data.order`.
///
/// Placement, cancellation, and trigger-order responses share this shape
/// with varying subsets of fields present.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderAck {
    #[serde(default)]
    pub symbol: String,
    #[serde(rename = "orderId")]
    pub order_id: i64,
    #[serde(default)]
    pub side: String,
    #[serde(rename = "positionSide", default)]
    pub position_side: String,
    #[serde(rename = "type", default)]
    pub order_type: String,
    #[serde(rename = "clientOrderID", alias = "clientOrderId", default)]
    pub client_order_id: String,
    #[serde(rename = "workingType", default)]
    pub working_type: String,
    #[serde(rename = "positionId", default)]
    pub position_id: String,
    #[serde(default, deserialize_with = "opt_decimal")]
    pub price: Option<Decimal>,
    #[serde(rename = "origQty", default, deserialize_with = "opt_decimal")]
    pub orig_qty: Option<Decimal>,
    #[serde(rename = "stopPrice", default, deserialize_with = "opt_decimal")]
    pub stop_price: Option<Decimal>,
}

/// `data` wrapper for order placement/cancellation responses.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrderData {
    pub order: OrderAck,
}

/// Full order record from GET /openApi/swap/v2/trade/order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDetails {
    #[serde(default)]
    pub symbol: String,
    #[serde(rename = "orderId")]
    pub order_id: i64,
    #[serde(default)]
    pub side: String,
    #[serde(rename = "positionSide", default)]
    pub position_side: String,
    #[serde(rename = "type", default)]
    pub order_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "clientOrderId", alias = "clientOrderID", default)]
    pub client_order_id: String,
    #[serde(default, deserialize_with = "opt_decimal")]
    pub price: Option<Decimal>,
    #[serde(rename = "origQty", default, deserialize_with = "opt_decimal")]
    pub orig_qty: Option<Decimal>,
    #[serde(rename = "executedQty", default, deserialize_with = "opt_decimal")]
    pub executed_qty: Option<Decimal>,
    #[serde(rename = "avgPrice", default, deserialize_with = "opt_decimal")]
    pub avg_price: Option<Decimal>,
    #[serde(rename = "cumQuote", default, deserialize_with = "opt_decimal")]
    pub cum_quote: Option<Decimal>,
    #[serde(rename = "stopPrice", default, deserialize_with = "opt_decimal")]
    pub stop_price: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal")]
    pub profit: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal")]
    pub commission: Option<Decimal>,
    #[serde(default)]
    pub time: i64,
    #[serde(rename = "updateTime", default)]
    pub update_time: i64,
}

/// `data` wrapper for the order details lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderQueryData {
    pub order: OrderDetails,
}

/// An open position from GET /openApi/swap/v2/user/positions.
#[derive(Debug, Clone, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub symbol: String,
    #[serde(rename = "positionId", default)]
    pub position_id: String,
    #[serde(rename = "positionSide", default)]
    pub position_side: String,
    #[serde(default)]
    pub isolated: bool,
    #[serde(rename = "positionAmt", default, deserialize_with = "opt_decimal")]
    pub position_amt: Option<Decimal>,
    /// Amount still available to close against.
    #[serde(rename = "availableAmt", deserialize_with = "decimal_from_str_or_number")]
    pub available_amt: Decimal,
    #[serde(rename = "avgPrice", default, deserialize_with = "opt_decimal")]
    pub avg_price: Option<Decimal>,
    #[serde(
        rename = "unrealizedProfit",
        default,
        deserialize_with = "opt_decimal"
    )]
    pub unrealized_profit: Option<Decimal>,
    #[serde(default)]
    pub leverage: u32,
}

/// Result of a market/limit order placement: the order acknowledgement
/// combined with the leverage data configured for the position side.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub order: OrderAck,
    pub leverage: LeverageData,
}

/// Deserialize a Decimal from either a JSON string or a bare number.
fn decimal_from_str_or_number<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => s.parse::<Decimal>().map_err(serde::de::Error::custom),
        Value::Number(n) => n
            .to_string()
            .parse::<Decimal>()
            .map_err(serde::de::Error::custom),
        other => Err(serde::de::Error::custom(format!(
            "expected decimal string or number, got {}",
            other
        ))),
    }
}

/// Optional variant of [`decimal_from_str_or_number`]; null becomes `None`.
fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => s
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        Value::Number(n) => n
            .to_string()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        other => Err(serde::de::Error::custom(format!(
            "expected decimal string or number, got {}",
            other
        ))),
    }
}
