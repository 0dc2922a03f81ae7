//! Order types and intent enums.

use serde::{Deserialize, Serialize};

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Convert from BingX string representation.
    pub fn from_bingx_str(s: &str) -> Option<Self> {
        match s {
            "BUY" => Some(Self::Buy),
            "SELL" => Some(Self::Sell),
            _ => None,
        }
    }

    /// Convert to BingX string representation.
    pub fn as_bingx_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Market,
    Limit,
}

impl OrderType {
    /// Convert from BingX string representation.
    pub fn from_bingx_str(s: &str) -> Option<Self> {
        match s {
            "MARKET" => Some(Self::Market),
            "LIMIT" => Some(Self::Limit),
            _ => None,
        }
    }

    /// Convert to BingX string representation.
    pub fn as_bingx_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
        }
    }
}

/// Position side (LONG or SHORT leg of a futures position).
///
/// Independent of order side: closing a LONG is a SELL order with
/// position side LONG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionSide {
    Long,
    Short,
}

impl PositionSide {
    /// Convert from BingX string representation.
    pub fn from_bingx_str(s: &str) -> Option<Self> {
        match s {
            "LONG" => Some(Self::Long),
            "SHORT" => Some(Self::Short),
            _ => None,
        }
    }

    /// Convert to BingX string representation.
    pub fn as_bingx_str(&self) -> &'static str {
        match self {
            Self::Long => "LONG",
            Self::Short => "SHORT",
        }
    }
}

/// Logical lifecycle state of a managed order.
///
/// Only the two `Requested*` trigger intents map to an exchange order
/// type; everything else is bookkeeping on the caller side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderIntent {
    OpenedTakeProfit,
    RequestedTakeProfit,
    CanceledTakeProfit,
    RequestedCancelTakeProfit,
    TriggeredTakeProfit,
    OpenedStopLoss,
    RequestedStopLoss,
    CanceledStopLoss,
    RequestedCancelStopLoss,
    TriggeredStopLoss,
    OpenOrder,
    RequestedOpenOrder,
    PartialCloseOrder,
    RequestedPartialCloseOrder,
    OpenedCloseOrder,
    RequestedCloseOrder,
    UrgentCloseOrder,
    RequestedUrgentCloseOrder,
}

impl OrderIntent {
    /// Stable string tag for logs and persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenedTakeProfit => "opened_take_profit",
            Self::RequestedTakeProfit => "requested_take_profit",
            Self::CanceledTakeProfit => "canceled_take_profit",
            Self::RequestedCancelTakeProfit => "requested_cancel_take_profit",
            Self::TriggeredTakeProfit => "triggered_take_profit",
            Self::OpenedStopLoss => "opened_stop_loss",
            Self::RequestedStopLoss => "requested_stop_loss",
            Self::CanceledStopLoss => "canceled_stop_loss",
            Self::RequestedCancelStopLoss => "requested_cancel_stop_loss",
            Self::TriggeredStopLoss => "triggered_stop_loss",
            Self::OpenOrder => "open_order",
            Self::RequestedOpenOrder => "requested_open_order",
            Self::PartialCloseOrder => "partial_close_order",
            Self::RequestedPartialCloseOrder => "requested_partial_close_order",
            Self::OpenedCloseOrder => "opened_close_order",
            Self::RequestedCloseOrder => "requested_close_order",
            Self::UrgentCloseOrder => "urgent_close_order",
            Self::RequestedUrgentCloseOrder => "requested_urgent_close_order",
        }
    }

    /// Exchange order type for trigger (TP/SL) order creation.
    ///
    /// Returns `None` for every intent that does not correspond to a
    /// trigger order request; callers must treat that as an input error
    /// rather than sending an incomplete payload.
    pub fn trigger_order_type(&self) -> Option<&'static str> {
        match self {
            Self::RequestedTakeProfit => Some("TAKE_PROFIT_MARKET"),
            Self::RequestedStopLoss => Some("STOP_MARKET"),
            _ => None,
        }
    }
}
