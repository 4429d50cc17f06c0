//! Untrusted order draft types as received over the JSON boundary.
//!
//! A draft is optional-field soup by design: every cross-field rule is
//! enforced by the validator, not here. All prices are exact decimals
//! carried as strings on the wire.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// Buy order.
    Buy,
    /// Sell order.
    Sell,
}

/// Order type (market, limit, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Market order - execute at best available price.
    Market,
    /// Limit order - execute at specified price or better.
    Limit,
    /// Stop order - becomes market order when stop price is reached.
    Stop,
    /// Stop-limit order - becomes limit order when stop price is reached.
    StopLimit,
}

impl OrderType {
    /// Stable wire name for this order type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::Stop => "STOP",
            Self::StopLimit => "STOP_LIMIT",
        }
    }
}

/// Order class (simple entry, bracket, one-cancels-other).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderClass {
    /// Plain entry order with no attached exits.
    Simple,
    /// Entry paired with both a take-profit and a stop-loss exit.
    Bracket,
    /// Two exit legs where filling one cancels the other.
    Oco,
}

/// Asset class of the traded instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetClass {
    /// Common stock.
    Equity,
    /// Listed option contract.
    Option,
}

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionType {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
}

/// Take-profit leg as drafted (limit price may be absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeProfitDraft {
    /// Limit price for the take-profit exit.
    #[serde(default)]
    pub limit_price: Option<Decimal>,
}

/// Stop-loss leg as drafted (stop price may be absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopLossDraft {
    /// Stop trigger price.
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    /// Optional limit price (makes the exit a stop-limit).
    #[serde(default)]
    pub limit_price: Option<Decimal>,
}

/// A loosely-typed order draft, prior to validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Instrument symbol (underlying symbol for options).
    pub symbol: String,
    /// Order side.
    pub side: OrderSide,
    /// Requested quantity (shares or contracts). Untrusted; may be
    /// zero or negative in a draft.
    pub quantity: i64,
    /// Entry order type.
    pub order_type: OrderType,
    /// Entry limit price (required for limit / stop-limit).
    #[serde(default)]
    pub limit_price: Option<Decimal>,
    /// Asset class.
    pub asset_class: AssetClass,
    /// Call or put (options only).
    #[serde(default)]
    pub option_type: Option<OptionType>,
    /// Strike price (options only).
    #[serde(default)]
    pub strike_price: Option<Decimal>,
    /// Expiration date, `YYYY-MM-DD` (options only).
    #[serde(default)]
    pub expiration_date: Option<String>,
    /// Order class.
    pub order_class: OrderClass,
    /// Take-profit leg (bracket / OCO).
    #[serde(default)]
    pub take_profit: Option<TakeProfitDraft>,
    /// Stop-loss leg (bracket / OCO).
    #[serde(default)]
    pub stop_loss: Option<StopLossDraft>,
    /// Trailing stop distance in price terms (exclusive with percent).
    #[serde(default)]
    pub trail_price: Option<Decimal>,
    /// Trailing stop distance in percent terms (exclusive with price).
    #[serde(default)]
    pub trail_percent: Option<Decimal>,
    /// Externally-supplied entry price estimate (e.g. a fetched quote
    /// for a market order). Absent for unestimated market orders.
    #[serde(default)]
    pub estimated_entry_price: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_draft_deserializes_minimal_fields() {
        let json = r#"{
            "symbol": "AAPL",
            "side": "BUY",
            "quantity": 10,
            "order_type": "MARKET",
            "asset_class": "EQUITY",
            "order_class": "SIMPLE"
        }"#;
        let draft: OrderDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.symbol, "AAPL");
        assert_eq!(draft.side, OrderSide::Buy);
        assert_eq!(draft.quantity, 10);
        assert!(draft.limit_price.is_none());
        assert!(draft.take_profit.is_none());
        assert!(draft.estimated_entry_price.is_none());
    }

    #[test]
    fn test_draft_deserializes_prices_as_strings() {
        let json = r#"{
            "symbol": "AAPL",
            "side": "SELL",
            "quantity": 5,
            "order_type": "LIMIT",
            "limit_price": "180.50",
            "asset_class": "EQUITY",
            "order_class": "BRACKET",
            "take_profit": { "limit_price": "170.00" },
            "stop_loss": { "stop_price": "190.00" }
        }"#;
        let draft: OrderDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.limit_price, Some(dec!(180.50)));
        assert_eq!(draft.take_profit.unwrap().limit_price, Some(dec!(170.00)));
        let stop = draft.stop_loss.unwrap();
        assert_eq!(stop.stop_price, Some(dec!(190.00)));
        assert!(stop.limit_price.is_none());
    }

    #[test]
    fn test_order_class_oco_wire_name() {
        let json = serde_json::to_string(&OrderClass::Oco).unwrap();
        assert_eq!(json, "\"OCO\"");
    }

    #[test]
    fn test_order_type_as_str() {
        assert_eq!(OrderType::Market.as_str(), "MARKET");
        assert_eq!(OrderType::StopLimit.as_str(), "STOP_LIMIT");
    }
}
