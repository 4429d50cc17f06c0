//! Risk-preview pricing.
//!
//! Pure function from a validated [`OrderSpec`] plus a caller-supplied
//! entry-price estimate to a [`PreviewBreakdown`]. The calculator
//! never fetches prices; an unknown entry price propagates as `None`
//! through notional and profit/loss, never as zero. All arithmetic is
//! exact decimal.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::models::{OrderSide, OrderSpec, PreviewBreakdown};

/// Computes deterministic risk metrics for validated orders.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskCalculator;

impl RiskCalculator {
    /// Create a new calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Price a validated order against an optional entry estimate.
    ///
    /// Theoretical outcomes assume limit/stop prices fill exactly as
    /// specified.
    ///
    /// # Errors
    /// Returns `InvalidPriceCombination` when a profit or loss leg
    /// sits on the wrong side of the entry price.
    pub fn price(
        &self,
        spec: &OrderSpec,
        entry_price: Option<Decimal>,
    ) -> Result<PreviewBreakdown, ValidationError> {
        let units = Decimal::from(spec.quantity()) * Decimal::from(spec.instrument().multiplier());
        let side = spec.side();

        let notional = entry_price.map(|price| price * units);
        let take_profit_price = spec.take_profit_price();
        let stop_loss_price = spec.stop_loss_trigger();

        let max_profit = match (entry_price, take_profit_price) {
            (Some(entry), Some(exit)) => {
                let profit = directional_pnl(side, entry, exit) * units;
                if profit < Decimal::ZERO {
                    return Err(ValidationError::invalid_price_combination(format!(
                        "Take-profit {exit} is on the wrong side of entry {entry} for a {} order",
                        side_name(side)
                    )));
                }
                Some(profit)
            }
            _ => None,
        };

        let max_loss = match (entry_price, stop_loss_price) {
            (Some(entry), Some(exit)) => {
                let loss = -(directional_pnl(side, entry, exit) * units);
                if loss < Decimal::ZERO {
                    return Err(ValidationError::invalid_price_combination(format!(
                        "Stop-loss {exit} is on the wrong side of entry {entry} for a {} order",
                        side_name(side)
                    )));
                }
                Some(loss)
            }
            _ => None,
        };

        // Division by zero is explicitly not reported as infinity.
        let risk_reward_ratio = match (max_profit, max_loss) {
            (Some(profit), Some(loss)) if !loss.is_zero() => Some(profit / loss),
            _ => None,
        };

        Ok(PreviewBreakdown {
            symbol: spec.instrument().symbol().to_string(),
            side,
            quantity: spec.quantity(),
            order_type: spec.pricing().order_type(),
            order_class: spec.order_class(),
            entry_price,
            notional,
            take_profit_price,
            stop_loss_price,
            max_profit,
            max_loss,
            risk_reward_ratio,
        })
    }
}

/// Profit, in price terms, of exiting at `exit_price` a position
/// entered at `entry_price`.
fn directional_pnl(side: OrderSide, entry_price: Decimal, exit_price: Decimal) -> Decimal {
    match side {
        OrderSide::Buy => exit_price - entry_price,
        OrderSide::Sell => entry_price - exit_price,
    }
}

const fn side_name(side: OrderSide) -> &'static str {
    match side {
        OrderSide::Buy => "buy",
        OrderSide::Sell => "sell",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorKind;
    use crate::models::{
        EntryPricing, Instrument, OptionType, StopLossLeg, TakeProfitLeg, TrailAmount,
    };
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn equity_bracket(side: OrderSide, tp: Decimal, sl: Decimal) -> OrderSpec {
        OrderSpec::Bracket {
            side,
            quantity: 10,
            instrument: Instrument::Equity {
                symbol: "AAPL".to_string(),
            },
            pricing: EntryPricing::Limit {
                limit_price: dec!(180),
            },
            take_profit: TakeProfitLeg { limit_price: tp },
            stop_loss: StopLossLeg::Fixed {
                stop_price: sl,
                limit_price: None,
            },
        }
    }

    fn option_bracket() -> OrderSpec {
        OrderSpec::Bracket {
            side: OrderSide::Buy,
            quantity: 1,
            instrument: Instrument::Option {
                symbol: "AAPL".to_string(),
                option_type: OptionType::Call,
                strike_price: dec!(185),
                expiration_date: NaiveDate::from_ymd_opt(2026, 12, 18).unwrap(),
            },
            pricing: EntryPricing::Market,
            take_profit: TakeProfitLeg {
                limit_price: dec!(3.50),
            },
            stop_loss: StopLossLeg::Fixed {
                stop_price: dec!(2.00),
                limit_price: None,
            },
        }
    }

    #[test]
    fn test_equity_bracket_known_scenario() {
        // Buy 10 at 180, take profit 190, stop 170.
        let spec = equity_bracket(OrderSide::Buy, dec!(190), dec!(170));
        let preview = RiskCalculator::new().price(&spec, Some(dec!(180))).unwrap();

        assert_eq!(preview.entry_price, Some(dec!(180.00)));
        assert_eq!(preview.notional, Some(dec!(1800.00)));
        assert_eq!(preview.max_profit, Some(dec!(100.00)));
        assert_eq!(preview.max_loss, Some(dec!(100.00)));
        assert_eq!(preview.risk_reward_ratio, Some(dec!(1.00)));
    }

    #[test]
    fn test_option_bracket_applies_multiplier() {
        // Buy 1 contract at estimated 2.50, take profit 3.50, stop 2.00.
        let preview = RiskCalculator::new()
            .price(&option_bracket(), Some(dec!(2.50)))
            .unwrap();

        assert_eq!(preview.notional, Some(dec!(250.00)));
        assert_eq!(preview.max_profit, Some(dec!(100.00)));
        assert_eq!(preview.max_loss, Some(dec!(50.00)));
        assert_eq!(preview.risk_reward_ratio, Some(dec!(2.00)));
    }

    #[test]
    fn test_sell_side_directional_math() {
        // Sell 10 at 180: profit target below entry, stop above.
        let spec = equity_bracket(OrderSide::Sell, dec!(170), dec!(190));
        let preview = RiskCalculator::new().price(&spec, Some(dec!(180))).unwrap();

        assert_eq!(preview.max_profit, Some(dec!(100)));
        assert_eq!(preview.max_loss, Some(dec!(100)));
    }

    #[test]
    fn test_unknown_entry_price_propagates_as_none() {
        let spec = equity_bracket(OrderSide::Buy, dec!(190), dec!(170));
        let preview = RiskCalculator::new().price(&spec, None).unwrap();

        assert_eq!(preview.entry_price, None);
        assert_eq!(preview.notional, None);
        assert_eq!(preview.max_profit, None);
        assert_eq!(preview.max_loss, None);
        assert_eq!(preview.risk_reward_ratio, None);
        // Leg prices are still known from the validated spec.
        assert_eq!(preview.take_profit_price, Some(dec!(190)));
        assert_eq!(preview.stop_loss_price, Some(dec!(170)));
    }

    #[test]
    fn test_take_profit_on_wrong_side_rejected() {
        // Buy with take-profit below entry: misconfiguration, not a
        // negative number.
        let spec = equity_bracket(OrderSide::Buy, dec!(170), dec!(160));
        let err = RiskCalculator::new()
            .price(&spec, Some(dec!(180)))
            .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidPriceCombination);
    }

    #[test]
    fn test_stop_loss_on_wrong_side_rejected() {
        let spec = equity_bracket(OrderSide::Buy, dec!(190), dec!(185));
        let err = RiskCalculator::new()
            .price(&spec, Some(dec!(180)))
            .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidPriceCombination);
    }

    #[test]
    fn test_zero_loss_yields_no_ratio() {
        // Stop at entry: max loss is zero, ratio must be None rather
        // than infinity.
        let spec = equity_bracket(OrderSide::Buy, dec!(190), dec!(180));
        let preview = RiskCalculator::new().price(&spec, Some(dec!(180))).unwrap();
        assert_eq!(preview.max_loss, Some(dec!(0)));
        assert_eq!(preview.risk_reward_ratio, None);
    }

    #[test]
    fn test_trailing_stop_reports_unknown_loss() {
        let spec = OrderSpec::Bracket {
            side: OrderSide::Buy,
            quantity: 10,
            instrument: Instrument::Equity {
                symbol: "AAPL".to_string(),
            },
            pricing: EntryPricing::Limit {
                limit_price: dec!(180),
            },
            take_profit: TakeProfitLeg {
                limit_price: dec!(190),
            },
            stop_loss: StopLossLeg::Trailing {
                trail: TrailAmount::Price(dec!(5)),
            },
        };
        let preview = RiskCalculator::new().price(&spec, Some(dec!(180))).unwrap();

        assert_eq!(preview.stop_loss_price, None);
        assert_eq!(preview.max_loss, None);
        assert_eq!(preview.risk_reward_ratio, None);
        // The profit side is still computable.
        assert_eq!(preview.max_profit, Some(dec!(100)));
    }

    #[test]
    fn test_pricing_is_deterministic() {
        let spec = equity_bracket(OrderSide::Buy, dec!(190), dec!(170));
        let calculator = RiskCalculator::new();
        let first = calculator.price(&spec, Some(dec!(180))).unwrap();
        let second = calculator.price(&spec, Some(dec!(180))).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
