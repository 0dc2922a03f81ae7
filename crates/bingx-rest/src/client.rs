//! BingX perpetual-swap REST API client.

use crate::error::BingxRestError;
use crate::responses::{
    ApiEnvelope, LeverageData, NewOrderData, OrderAck, OrderDetails, OrderQueryData, PlacedOrder,
    Position, ServerTimeData,
};
use auth::{ApiCredentials, RequestSigner};
use common::BingxEnvironment;
use execution_core::{OrderIntent, OrderSide, OrderType, PositionSide};
use reqwest::Method;
use rest_client::RestClient;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

/// Request timeout for BingX API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the API key on every authenticated request.
const API_KEY_HEADER: &str = "X-BX-APIKEY";

// Endpoint paths (BingX swap v2).
const ORDER_PATH: &str = "/openApi/swap/v2/trade/order";
const LEVERAGE_PATH: &str = "/openApi/swap/v2/trade/leverage";
const POSITIONS_PATH: &str = "/openApi/swap/v2/user/positions";
const SERVER_TIME_PATH: &str = "/openApi/swap/v2/server/time";

/// BingX REST API client with request signing.
///
/// Holds the immutable credential pair for its whole lifetime; every call
/// is a self-contained signed request, so a single client can be shared
/// across tasks freely.
pub struct BingxRestClient {
    client: RestClient,
    credentials: ApiCredentials,
    /// Time offset between local clock and BingX server (local - server).
    time_offset_ms: AtomicI64,
}

impl BingxRestClient {
    /// Create a new BingX REST client for production.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(credentials: ApiCredentials) -> Result<Self, BingxRestError> {
        Self::with_environment(credentials, BingxEnvironment::Production)
    }

    /// Create a new BingX REST client for a specific environment.
    ///
    /// # Arguments
    /// * `credentials` - API credentials for authenticated requests
    /// * `environment` - Production or demo trading
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_environment(
        credentials: ApiCredentials,
        environment: BingxEnvironment,
    ) -> Result<Self, BingxRestError> {
        Self::with_base_url(credentials, environment.rest_base_url(), REQUEST_TIMEOUT)
    }

    /// Create a client against an explicit base URL with a custom timeout.
    ///
    /// # Arguments
    /// * `credentials` - API credentials for authenticated requests
    /// * `base_url` - Base URL override (e.g. a gateway or test server)
    /// * `timeout` - Per-request timeout; surfaces as `RestError::Timeout`
    pub fn with_base_url(
        credentials: ApiCredentials,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, BingxRestError> {
        let client = RestClient::new(base_url, timeout)?;

        Ok(Self {
            client,
            credentials,
            time_offset_ms: AtomicI64::new(0),
        })
    }

    /// Get the base URL this client sends to.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Get the API key (for logging/debugging).
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Get the current server timestamp adjusted for time offset.
    ///
    /// Request timestamps are stamped with this value so signatures stay
    /// valid under local clock skew.
    pub fn server_timestamp_ms(&self) -> i64 {
        let local_time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_millis() as i64;

        local_time - self.time_offset_ms.load(Ordering::Relaxed)
    }

    // ========================================================================
    // Time Synchronization
    // ========================================================================

    /// Synchronize with BingX server time.
    ///
    /// This calculates the offset between the local clock and the server
    /// clock. Should be called on startup and again if timestamps start
    /// being rejected.
    pub async fn sync_time(&self) -> Result<(), BingxRestError> {
        let before = std::time::Instant::now();
        let envelope: ApiEnvelope<ServerTimeData> =
            self.client.get(SERVER_TIME_PATH, None, None).await?;
        let rtt = before.elapsed().as_millis() as i64;

        let server_time = envelope.into_data()?.server_time;

        let local_time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_millis() as i64;

        // Estimate server time at midpoint of request
        let estimated_server_time = server_time + (rtt / 2);
        let offset = local_time - estimated_server_time;

        self.time_offset_ms.store(offset, Ordering::Relaxed);

        tracing::info!(
            server_time = server_time,
            local_time = local_time,
            offset_ms = offset,
            rtt_ms = rtt,
            "Time synchronized with BingX server"
        );

        Ok(())
    }

    // ========================================================================
    // Order Placement
    // ========================================================================

    /// Place a market order.
    ///
    /// Configures leverage for `(symbol, position_side)` first; a leverage
    /// failure aborts before any order is submitted. The returned
    /// [`PlacedOrder`] combines the order acknowledgement with the
    /// leverage data.
    ///
    /// # Arguments
    /// * `symbol` - Contract symbol (e.g., "BTC-USDT")
    /// * `leverage` - Leverage to configure before placing
    /// * `side` - Buy or Sell
    /// * `quantity` - Order quantity
    /// * `position_side` - Long or Short leg
    /// * `extra` - Optional endpoint-specific fields, merged last with
    ///   caller precedence
    pub async fn place_market_order(
        &self,
        symbol: &str,
        leverage: u32,
        side: OrderSide,
        quantity: Decimal,
        position_side: PositionSide,
        extra: Option<&[(String, String)]>,
    ) -> Result<PlacedOrder, BingxRestError> {
        self.place_order(
            symbol,
            leverage,
            side,
            OrderType::Market,
            quantity,
            None,
            position_side,
            extra,
        )
        .await
    }

    /// Place a limit order at the given price.
    ///
    /// Same composite behavior as [`Self::place_market_order`].
    pub async fn place_limit_order(
        &self,
        symbol: &str,
        leverage: u32,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
        position_side: PositionSide,
        extra: Option<&[(String, String)]>,
    ) -> Result<PlacedOrder, BingxRestError> {
        self.place_order(
            symbol,
            leverage,
            side,
            OrderType::Limit,
            quantity,
            Some(price),
            position_side,
            extra,
        )
        .await
    }

    #[allow(clippy::too_many_arguments)]
    async fn place_order(
        &self,
        symbol: &str,
        leverage: u32,
        side: OrderSide,
        order_type: OrderType,
        quantity: Decimal,
        price: Option<Decimal>,
        position_side: PositionSide,
        extra: Option<&[(String, String)]>,
    ) -> Result<PlacedOrder, BingxRestError> {
        let leverage_data = self.set_leverage(symbol, leverage, position_side).await?;

        let mut params: Vec<(&str, String)> = vec![
            ("symbol", symbol.to_string()),
            ("side", side.as_bingx_str().to_string()),
            ("type", order_type.as_bingx_str().to_string()),
            ("quantity", quantity.normalize().to_string()),
            ("leverage", leverage.to_string()),
            ("positionSide", position_side.as_bingx_str().to_string()),
        ];

        if let Some(p) = price {
            params.push(("price", p.normalize().to_string()));
        }

        if let Some(extra) = extra {
            merge_overrides(&mut params, extra);
        }

        tracing::info!(
            symbol = %symbol,
            side = ?side,
            order_type = ?order_type,
            quantity = %quantity,
            leverage = leverage,
            "Placing order"
        );

        let data: NewOrderData = self.send_signed(Method::POST, ORDER_PATH, &params).await?;

        tracing::info!(order_id = data.order.order_id, "Order placed");

        Ok(PlacedOrder {
            order: data.order,
            leverage: leverage_data,
        })
    }

    // ========================================================================
    // Leverage & Positions
    // ========================================================================

    /// Set leverage for a `(symbol, position_side)` pair.
    ///
    /// POST /openApi/swap/v2/trade/leverage
    pub async fn set_leverage(
        &self,
        symbol: &str,
        leverage: u32,
        position_side: PositionSide,
    ) -> Result<LeverageData, BingxRestError> {
        // The leverage endpoint calls the position side "side".
        let params = vec![
            ("symbol", symbol.to_string()),
            ("leverage", leverage.to_string()),
            ("side", position_side.as_bingx_str().to_string()),
        ];

        tracing::info!(
            symbol = %symbol,
            leverage = leverage,
            position_side = ?position_side,
            "Setting leverage"
        );

        self.send_signed(Method::POST, LEVERAGE_PATH, &params).await
    }

    /// Close a fraction of the open position for `symbol`.
    ///
    /// Queries the open position first and computes the closing quantity as
    /// `availableAmt * fraction`. The fraction is a raw multiplier (0.5
    /// closes half); it is deliberately not validated against [0, 1].
    ///
    /// # Errors
    /// Returns [`BingxRestError::NoOpenPosition`] when no open position
    /// exists for the symbol; no closing order is submitted in that case.
    pub async fn close_position_fraction(
        &self,
        symbol: &str,
        fraction: Decimal,
        side: OrderSide,
        order_type: OrderType,
        position_side: PositionSide,
    ) -> Result<OrderAck, BingxRestError> {
        let params = vec![("symbol", symbol.to_string())];
        let envelope: ApiEnvelope<Vec<Position>> = self
            .signed_envelope(Method::GET, POSITIONS_PATH, &params)
            .await?;

        if envelope.code != 0 {
            return Err(BingxRestError::Api {
                code: envelope.code,
                message: envelope.msg,
            });
        }

        let positions = envelope.data.unwrap_or_default();
        let Some(position) = positions.first() else {
            return Err(BingxRestError::NoOpenPosition {
                symbol: symbol.to_string(),
            });
        };

        let quantity = closing_quantity(position.available_amt, fraction);

        let params = vec![
            ("symbol", symbol.to_string()),
            ("side", side.as_bingx_str().to_string()),
            ("type", order_type.as_bingx_str().to_string()),
            ("quantity", quantity.to_string()),
            ("positionSide", position_side.as_bingx_str().to_string()),
        ];

        tracing::info!(
            symbol = %symbol,
            available = %position.available_amt,
            fraction = %fraction,
            quantity = %quantity,
            "Closing position fraction"
        );

        let data: NewOrderData = self.send_signed(Method::POST, ORDER_PATH, &params).await?;
        Ok(data.order)
    }

    // ========================================================================
    // Order Management
    // ========================================================================

    /// Cancel a pending order.
    ///
    /// DELETE /openApi/swap/v2/trade/order
    pub async fn cancel_order(
        &self,
        order_id: i64,
        symbol: &str,
    ) -> Result<OrderAck, BingxRestError> {
        let params = vec![
            ("orderId", order_id.to_string()),
            ("symbol", symbol.to_string()),
        ];

        tracing::info!(order_id = order_id, symbol = %symbol, "Canceling order");

        let data: NewOrderData = self
            .send_signed(Method::DELETE, ORDER_PATH, &params)
            .await?;

        tracing::info!(order_id = data.order.order_id, "Order canceled");

        Ok(data.order)
    }

    /// Create a take-profit or stop-loss trigger order.
    ///
    /// The intent must be one of the `Requested*` trigger intents; any
    /// other intent fails with [`BingxRestError::InvalidOrder`] before a
    /// request is made.
    pub async fn place_trigger_order(
        &self,
        symbol: &str,
        quantity: Decimal,
        stop_price: Decimal,
        side: OrderSide,
        position_side: PositionSide,
        intent: OrderIntent,
    ) -> Result<OrderAck, BingxRestError> {
        let order_type = intent.trigger_order_type().ok_or_else(|| {
            BingxRestError::InvalidOrder(format!(
                "intent {} does not map to a trigger order type",
                intent.as_str()
            ))
        })?;

        let params = vec![
            ("symbol", symbol.to_string()),
            ("quantity", quantity.normalize().to_string()),
            ("stopPrice", stop_price.normalize().to_string()),
            ("side", side.as_bingx_str().to_string()),
            ("positionSide", position_side.as_bingx_str().to_string()),
            ("type", order_type.to_string()),
        ];

        tracing::info!(
            symbol = %symbol,
            order_type = order_type,
            stop_price = %stop_price,
            "Placing trigger order"
        );

        let data: NewOrderData = self.send_signed(Method::POST, ORDER_PATH, &params).await?;
        Ok(data.order)
    }

    /// Fetch the details of a single order.
    ///
    /// GET /openApi/swap/v2/trade/order
    pub async fn query_order(
        &self,
        symbol: &str,
        order_id: i64,
    ) -> Result<OrderDetails, BingxRestError> {
        let params = vec![
            ("symbol", symbol.to_string()),
            ("orderId", order_id.to_string()),
        ];

        let data: OrderQueryData = self.send_signed(Method::GET, ORDER_PATH, &params).await?;
        Ok(data.order)
    }

    // ========================================================================
    // Signed Dispatch
    // ========================================================================

    /// Sign the parameters and issue the request, returning the raw envelope.
    async fn signed_envelope<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<ApiEnvelope<T>, BingxRestError> {
        let param_refs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();

        let signer = RequestSigner::new(&self.credentials);
        let timestamp = self.server_timestamp_ms();
        let signed_query = signer.sign_params(&param_refs, timestamp);

        let headers = [(API_KEY_HEADER, self.credentials.api_key())];

        let envelope = self
            .client
            .request(method, path, Some(&signed_query), Some(&headers))
            .await?;

        Ok(envelope)
    }

    /// Sign, send, and unwrap the envelope `data` payload.
    async fn send_signed<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, BingxRestError> {
        self.signed_envelope(method, path, params).await?.into_data()
    }
}

impl std::fmt::Debug for BingxRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BingxRestClient")
            .field("base_url", &self.client.base_url())
            .field("api_key", &self.credentials.api_key())
            .field(
                "time_offset_ms",
                &self.time_offset_ms.load(Ordering::Relaxed),
            )
            .finish()
    }
}

/// Quantity for a fractional close.
fn closing_quantity(available: Decimal, fraction: Decimal) -> Decimal {
    (available * fraction).normalize()
}

/// Apply caller-supplied overrides to the payload, last write wins per key.
fn merge_overrides<'a>(params: &mut Vec<(&'a str, String)>, extra: &'a [(String, String)]) {
    for (key, value) in extra {
        match params.iter_mut().find(|(k, _)| *k == key.as_str()) {
            Some(slot) => slot.1 = value.clone(),
            None => params.push((key.as_str(), value.clone())),
        }
    }
}
