//! Core order domain types shared across the workspace.

mod order;

pub use order::{OrderIntent, OrderSide, OrderType, PositionSide};
