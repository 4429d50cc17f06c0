//! Canonical, invariant-respecting order specification.
//!
//! An [`OrderSpec`] is only produced by the validator. Each variant
//! carries its required sub-structures by construction: a `Bracket`
//! cannot exist without both legs, an option instrument cannot exist
//! without its three option fields, and a trailing stop carries exactly
//! one of trail-price / trail-percent.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::draft::{OptionType, OrderClass, OrderSide, OrderType};

/// Standard option contract share multiplier.
pub const OPTION_MULTIPLIER: u32 = 100;

/// The traded instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "asset_class", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Instrument {
    /// Common stock.
    Equity {
        /// Ticker symbol.
        symbol: String,
    },
    /// Listed option contract. All three option fields are present by
    /// construction.
    Option {
        /// Underlying symbol.
        symbol: String,
        /// Call or put.
        option_type: OptionType,
        /// Strike price.
        strike_price: Decimal,
        /// Expiration date.
        expiration_date: NaiveDate,
    },
}

impl Instrument {
    /// The instrument's symbol (underlying symbol for options).
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Equity { symbol } | Self::Option { symbol, .. } => symbol,
        }
    }

    /// Contract-size factor converting unit price into dollar exposure.
    #[must_use]
    pub const fn multiplier(&self) -> u32 {
        match self {
            Self::Equity { .. } => 1,
            Self::Option { .. } => OPTION_MULTIPLIER,
        }
    }

    /// Returns true for option instruments.
    #[must_use]
    pub const fn is_option(&self) -> bool {
        matches!(self, Self::Option { .. })
    }
}

/// Validated entry pricing. Limit prices are present by construction
/// for the order types that require them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "order_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryPricing {
    /// Market entry; fills at the prevailing price.
    Market,
    /// Limit entry.
    Limit {
        /// Entry limit price.
        limit_price: Decimal,
    },
    /// Stop entry; trigger price is an execution-time concern.
    Stop,
    /// Stop-limit entry.
    StopLimit {
        /// Entry limit price.
        limit_price: Decimal,
    },
}

impl EntryPricing {
    /// The wire-level order type for this pricing.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        match self {
            Self::Market => OrderType::Market,
            Self::Limit { .. } => OrderType::Limit,
            Self::Stop => OrderType::Stop,
            Self::StopLimit { .. } => OrderType::StopLimit,
        }
    }

    /// Entry limit price, if this pricing carries one.
    #[must_use]
    pub const fn limit_price(&self) -> Option<Decimal> {
        match self {
            Self::Limit { limit_price } | Self::StopLimit { limit_price } => Some(*limit_price),
            Self::Market | Self::Stop => None,
        }
    }
}

/// Take-profit exit leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TakeProfitLeg {
    /// Limit price at which profit is taken.
    pub limit_price: Decimal,
}

/// Trailing stop distance. Exactly one representation exists per leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrailAmount {
    /// Fixed dollar distance from the high-water mark.
    Price(Decimal),
    /// Percent distance from the high-water mark.
    Percent(Decimal),
}

/// Stop-loss exit leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StopLossLeg {
    /// Fixed stop with a known trigger price.
    Fixed {
        /// Stop trigger price.
        stop_price: Decimal,
        /// Optional limit price (stop-limit exit).
        limit_price: Option<Decimal>,
    },
    /// Trailing stop. The actual trigger price is unknowable until the
    /// order is live tracking price.
    Trailing {
        /// Trail distance.
        trail: TrailAmount,
    },
}

impl StopLossLeg {
    /// Fixed trigger price, if one exists. `None` for trailing stops.
    #[must_use]
    pub const fn trigger_price(&self) -> Option<Decimal> {
        match self {
            Self::Fixed { stop_price, .. } => Some(*stop_price),
            Self::Trailing { .. } => None,
        }
    }
}

/// One exit leg of an OCO pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExitLeg {
    /// Take-profit exit.
    TakeProfit(TakeProfitLeg),
    /// Stop-loss exit.
    StopLoss(StopLossLeg),
}

/// A validated, canonical order specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "order_class", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSpec {
    /// Plain entry order with no attached exits.
    Simple {
        /// Order side.
        side: OrderSide,
        /// Positive quantity (shares or contracts).
        quantity: u64,
        /// Instrument.
        instrument: Instrument,
        /// Entry pricing.
        pricing: EntryPricing,
    },
    /// Entry paired with both a take-profit and a stop-loss exit.
    Bracket {
        /// Order side.
        side: OrderSide,
        /// Positive quantity.
        quantity: u64,
        /// Instrument.
        instrument: Instrument,
        /// Entry pricing.
        pricing: EntryPricing,
        /// Take-profit leg.
        take_profit: TakeProfitLeg,
        /// Stop-loss leg.
        stop_loss: StopLossLeg,
    },
    /// Two independent exit legs; cancel-on-fill semantics are an
    /// execution-time concern.
    OneCancelsOther {
        /// Order side.
        side: OrderSide,
        /// Positive quantity.
        quantity: u64,
        /// Instrument.
        instrument: Instrument,
        /// Entry pricing.
        pricing: EntryPricing,
        /// First exit leg.
        leg_a: ExitLeg,
        /// Second exit leg.
        leg_b: ExitLeg,
    },
}

impl OrderSpec {
    /// Order side.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        match self {
            Self::Simple { side, .. }
            | Self::Bracket { side, .. }
            | Self::OneCancelsOther { side, .. } => *side,
        }
    }

    /// Validated positive quantity.
    #[must_use]
    pub const fn quantity(&self) -> u64 {
        match self {
            Self::Simple { quantity, .. }
            | Self::Bracket { quantity, .. }
            | Self::OneCancelsOther { quantity, .. } => *quantity,
        }
    }

    /// The traded instrument.
    #[must_use]
    pub const fn instrument(&self) -> &Instrument {
        match self {
            Self::Simple { instrument, .. }
            | Self::Bracket { instrument, .. }
            | Self::OneCancelsOther { instrument, .. } => instrument,
        }
    }

    /// Entry pricing.
    #[must_use]
    pub const fn pricing(&self) -> &EntryPricing {
        match self {
            Self::Simple { pricing, .. }
            | Self::Bracket { pricing, .. }
            | Self::OneCancelsOther { pricing, .. } => pricing,
        }
    }

    /// Order class tag for reporting.
    #[must_use]
    pub const fn order_class(&self) -> OrderClass {
        match self {
            Self::Simple { .. } => OrderClass::Simple,
            Self::Bracket { .. } => OrderClass::Bracket,
            Self::OneCancelsOther { .. } => OrderClass::Oco,
        }
    }

    /// Take-profit limit price, when this order carries such a leg.
    #[must_use]
    pub fn take_profit_price(&self) -> Option<Decimal> {
        match self {
            Self::Simple { .. } => None,
            Self::Bracket { take_profit, .. } => Some(take_profit.limit_price),
            Self::OneCancelsOther { leg_a, leg_b, .. } => {
                [leg_a, leg_b].into_iter().find_map(|leg| match leg {
                    ExitLeg::TakeProfit(tp) => Some(tp.limit_price),
                    ExitLeg::StopLoss(_) => None,
                })
            }
        }
    }

    /// Stop-loss trigger price, when a fixed stop leg exists. Trailing
    /// stops report `None`: the trigger is not knowable before the
    /// order is live.
    #[must_use]
    pub fn stop_loss_trigger(&self) -> Option<Decimal> {
        match self {
            Self::Simple { .. } => None,
            Self::Bracket { stop_loss, .. } => stop_loss.trigger_price(),
            Self::OneCancelsOther { leg_a, leg_b, .. } => {
                [leg_a, leg_b].into_iter().find_map(|leg| match leg {
                    ExitLeg::StopLoss(sl) => sl.trigger_price(),
                    ExitLeg::TakeProfit(_) => None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn equity(symbol: &str) -> Instrument {
        Instrument::Equity {
            symbol: symbol.to_string(),
        }
    }

    #[test]
    fn test_multiplier_equity_vs_option() {
        let stock = equity("AAPL");
        assert_eq!(stock.multiplier(), 1);
        assert!(!stock.is_option());

        let contract = Instrument::Option {
            symbol: "AAPL".to_string(),
            option_type: OptionType::Call,
            strike_price: dec!(150),
            expiration_date: NaiveDate::from_ymd_opt(2026, 12, 18).unwrap(),
        };
        assert_eq!(contract.multiplier(), 100);
        assert!(contract.is_option());
        assert_eq!(contract.symbol(), "AAPL");
    }

    #[test]
    fn test_entry_pricing_limit_price() {
        assert_eq!(EntryPricing::Market.limit_price(), None);
        assert_eq!(
            EntryPricing::Limit {
                limit_price: dec!(180)
            }
            .limit_price(),
            Some(dec!(180))
        );
        assert_eq!(
            EntryPricing::StopLimit {
                limit_price: dec!(99.50)
            }
            .order_type(),
            OrderType::StopLimit
        );
    }

    #[test]
    fn test_trailing_stop_has_no_trigger_price() {
        let leg = StopLossLeg::Trailing {
            trail: TrailAmount::Percent(dec!(5)),
        };
        assert_eq!(leg.trigger_price(), None);

        let fixed = StopLossLeg::Fixed {
            stop_price: dec!(170),
            limit_price: None,
        };
        assert_eq!(fixed.trigger_price(), Some(dec!(170)));
    }

    #[test]
    fn test_oco_leg_extraction() {
        let spec = OrderSpec::OneCancelsOther {
            side: OrderSide::Buy,
            quantity: 10,
            instrument: equity("MSFT"),
            pricing: EntryPricing::Market,
            leg_a: ExitLeg::TakeProfit(TakeProfitLeg {
                limit_price: dec!(420),
            }),
            leg_b: ExitLeg::StopLoss(StopLossLeg::Fixed {
                stop_price: dec!(380),
                limit_price: None,
            }),
        };
        assert_eq!(spec.take_profit_price(), Some(dec!(420)));
        assert_eq!(spec.stop_loss_trigger(), Some(dec!(380)));
        assert_eq!(spec.order_class(), OrderClass::Oco);
    }

    #[test]
    fn test_simple_has_no_exit_prices() {
        let spec = OrderSpec::Simple {
            side: OrderSide::Sell,
            quantity: 3,
            instrument: equity("SPY"),
            pricing: EntryPricing::Limit {
                limit_price: dec!(500),
            },
        };
        assert_eq!(spec.take_profit_price(), None);
        assert_eq!(spec.stop_loss_trigger(), None);
        assert_eq!(spec.quantity(), 3);
        assert_eq!(spec.side(), OrderSide::Sell);
    }
}
