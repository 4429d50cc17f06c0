//! Preview output types.
//!
//! A [`PreviewBreakdown`] is the per-order result of risk pricing; a
//! [`PreviewResponse`] is the batch aggregate. All monetary fields
//! serialize as exact decimal strings. Unknown values stay `null` on
//! the wire; they are never coerced to zero at the order level.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::draft::{OrderClass, OrderSide, OrderType};
use crate::error::OrderError;

/// Deterministic risk metrics for a single validated order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewBreakdown {
    /// Instrument symbol (underlying symbol for options).
    pub symbol: String,
    /// Order side.
    pub side: OrderSide,
    /// Validated quantity.
    pub quantity: u64,
    /// Entry order type.
    pub order_type: OrderType,
    /// Order class.
    pub order_class: OrderClass,
    /// Entry price used for the preview; `None` when no estimate was
    /// supplied and the entry carries no limit price.
    pub entry_price: Option<Decimal>,
    /// Dollar exposure: entry price x quantity x multiplier.
    pub notional: Option<Decimal>,
    /// Take-profit limit price, when such a leg exists.
    pub take_profit_price: Option<Decimal>,
    /// Fixed stop-loss trigger price. `None` for trailing stops.
    pub stop_loss_price: Option<Decimal>,
    /// Theoretical maximum profit, non-negative.
    pub max_profit: Option<Decimal>,
    /// Theoretical maximum loss magnitude, non-negative.
    pub max_loss: Option<Decimal>,
    /// Max profit divided by max loss; `None` when either is unknown
    /// or max loss is zero.
    pub risk_reward_ratio: Option<Decimal>,
}

impl PreviewBreakdown {
    /// Whether this order contributed a known notional to batch totals.
    #[must_use]
    pub const fn is_priced(&self) -> bool {
        self.notional.is_some()
    }
}

/// Aggregate preview over a batch of orders.
///
/// Totals sum the known values only; unknown entries contribute zero.
/// `unpriced_orders` and `errors` make a partial total visible so a
/// caller never silently displays a total that excludes data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// Sum of known notionals.
    pub total_notional: Decimal,
    /// Sum of known max profits.
    pub total_max_profit: Decimal,
    /// Sum of known max loss magnitudes.
    pub total_max_loss: Decimal,
    /// Number of successfully validated orders with no known notional.
    pub unpriced_orders: usize,
    /// Per-order breakdowns, in input order.
    pub orders: Vec<PreviewBreakdown>,
    /// Per-order validation failures, in input order.
    pub errors: Vec<OrderError>,
}

impl PreviewResponse {
    /// True when every order in the batch was validated and priced,
    /// i.e. the totals cover the whole batch.
    #[must_use]
    pub fn is_fully_priced(&self) -> bool {
        self.unpriced_orders == 0 && self.errors.is_empty()
    }
}
