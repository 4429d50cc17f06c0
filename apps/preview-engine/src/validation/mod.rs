//! Draft validation.
//!
//! Converts an untrusted [`OrderDraft`] into a canonical [`OrderSpec`]
//! or a structured [`ValidationError`]. Rules are evaluated in a fixed
//! order so error reporting is deterministic: quantity, entry limit
//! price, option fields, bracket legs, OCO legs, trailing spec. The
//! first failure wins. No side effects, no I/O.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::models::{
    AssetClass, EntryPricing, ExitLeg, Instrument, OrderClass, OrderDraft, OrderSpec, OrderType,
    StopLossLeg, TakeProfitLeg, TrailAmount,
};

/// Validates order drafts into canonical order specs.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderDraftValidator;

impl OrderDraftValidator {
    /// Create a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validate a draft into a canonical spec.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] in deterministic rule
    /// order.
    pub fn validate(&self, draft: &OrderDraft) -> Result<OrderSpec, ValidationError> {
        let quantity = validate_quantity(draft.quantity)?;
        let pricing = validate_pricing(draft)?;
        let instrument = validate_instrument(draft)?;
        let side = draft.side;

        match draft.order_class {
            OrderClass::Simple => Ok(OrderSpec::Simple {
                side,
                quantity,
                instrument,
                pricing,
            }),
            OrderClass::Bracket => {
                let (take_profit, stop_loss) = validate_bracket_legs(draft)?;
                Ok(OrderSpec::Bracket {
                    side,
                    quantity,
                    instrument,
                    pricing,
                    take_profit,
                    stop_loss,
                })
            }
            OrderClass::Oco => {
                let (leg_a, leg_b) = validate_oco_legs(draft)?;
                Ok(OrderSpec::OneCancelsOther {
                    side,
                    quantity,
                    instrument,
                    pricing,
                    leg_a,
                    leg_b,
                })
            }
        }
    }
}

/// Rule 1: quantity must be a positive integer.
fn validate_quantity(quantity: i64) -> Result<u64, ValidationError> {
    u64::try_from(quantity)
        .ok()
        .filter(|q| *q > 0)
        .ok_or_else(|| ValidationError::invalid_quantity(quantity))
}

/// Rule 2: limit and stop-limit entries require a limit price.
fn validate_pricing(draft: &OrderDraft) -> Result<EntryPricing, ValidationError> {
    match draft.order_type {
        OrderType::Market => Ok(EntryPricing::Market),
        OrderType::Stop => Ok(EntryPricing::Stop),
        OrderType::Limit => draft
            .limit_price
            .map(|limit_price| EntryPricing::Limit { limit_price })
            .ok_or_else(|| ValidationError::missing_limit_price(OrderType::Limit.as_str())),
        OrderType::StopLimit => draft
            .limit_price
            .map(|limit_price| EntryPricing::StopLimit { limit_price })
            .ok_or_else(|| ValidationError::missing_limit_price(OrderType::StopLimit.as_str())),
    }
}

/// Rule 3: option instruments require all three option fields.
fn validate_instrument(draft: &OrderDraft) -> Result<Instrument, ValidationError> {
    let symbol = draft.symbol.trim().to_uppercase();

    match draft.asset_class {
        AssetClass::Equity => Ok(Instrument::Equity { symbol }),
        AssetClass::Option => {
            let (Some(option_type), Some(strike_price), Some(raw_date)) = (
                draft.option_type,
                draft.strike_price,
                draft.expiration_date.as_deref(),
            ) else {
                let mut missing = Vec::new();
                if draft.option_type.is_none() {
                    missing.push("option_type");
                }
                if draft.strike_price.is_none() {
                    missing.push("strike_price");
                }
                if draft.expiration_date.is_none() {
                    missing.push("expiration_date");
                }
                return Err(ValidationError::incomplete_option_spec(format!(
                    "Option orders require {}",
                    missing.join(", ")
                )));
            };

            let expiration_date =
                NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| {
                    ValidationError::incomplete_option_spec(format!(
                        "expiration_date '{raw_date}' is not a valid YYYY-MM-DD date"
                    ))
                })?;

            Ok(Instrument::Option {
                symbol,
                option_type,
                strike_price,
                expiration_date,
            })
        }
    }
}

/// Rule 4: bracket orders require both a take-profit and a stop-loss
/// leg. Leg details (rule 6 included) are checked after presence.
fn validate_bracket_legs(
    draft: &OrderDraft,
) -> Result<(TakeProfitLeg, StopLossLeg), ValidationError> {
    let mut missing = Vec::new();
    if draft.take_profit.is_none() {
        missing.push("a take-profit leg");
    }
    if !has_stop_leg(draft) {
        missing.push("a stop-loss leg");
    }
    if !missing.is_empty() {
        return Err(ValidationError::incomplete_bracket_legs(format!(
            "Bracket orders require {}",
            missing.join(" and ")
        )));
    }

    let take_profit = take_profit_leg(draft, |msg| ValidationError::incomplete_bracket_legs(msg))?;
    let stop_loss = stop_loss_leg(draft, |msg| ValidationError::incomplete_bracket_legs(msg))?;
    Ok((take_profit, stop_loss))
}

/// Rule 5: OCO orders require exactly two exit legs, each independently
/// valid. The two legs are the take-profit exit and the stop-loss exit.
fn validate_oco_legs(draft: &OrderDraft) -> Result<(ExitLeg, ExitLeg), ValidationError> {
    let mut missing = Vec::new();
    if draft.take_profit.is_none() {
        missing.push("a take-profit exit");
    }
    if !has_stop_leg(draft) {
        missing.push("a stop-loss exit");
    }
    if !missing.is_empty() {
        return Err(ValidationError::incomplete_oco_legs(format!(
            "OCO orders require exactly two exit legs; missing {}",
            missing.join(" and ")
        )));
    }

    let take_profit = take_profit_leg(draft, |msg| ValidationError::incomplete_oco_legs(msg))?;
    let stop_loss = stop_loss_leg(draft, |msg| ValidationError::incomplete_oco_legs(msg))?;
    Ok((
        ExitLeg::TakeProfit(take_profit),
        ExitLeg::StopLoss(stop_loss),
    ))
}

fn has_stop_leg(draft: &OrderDraft) -> bool {
    draft.stop_loss.is_some() || draft.trail_price.is_some() || draft.trail_percent.is_some()
}

fn take_profit_leg(
    draft: &OrderDraft,
    incomplete: impl Fn(String) -> ValidationError,
) -> Result<TakeProfitLeg, ValidationError> {
    let leg = draft
        .take_profit
        .as_ref()
        .ok_or_else(|| incomplete("Take-profit leg is missing".to_string()))?;
    let limit_price = leg
        .limit_price
        .ok_or_else(|| incomplete("Take-profit leg requires a limit price".to_string()))?;
    Ok(TakeProfitLeg { limit_price })
}

/// Rule 6: a trailing leg must specify exactly one of trail price /
/// trail percent, and cannot be combined with a fixed stop price.
fn stop_loss_leg(
    draft: &OrderDraft,
    incomplete: impl Fn(String) -> ValidationError,
) -> Result<StopLossLeg, ValidationError> {
    let trail = match (draft.trail_price, draft.trail_percent) {
        (Some(_), Some(_)) => {
            return Err(ValidationError::ambiguous_trail_spec(
                "Trailing stop must specify exactly one of trail_price and trail_percent",
            ));
        }
        (Some(price), None) => Some(TrailAmount::Price(price)),
        (None, Some(percent)) => Some(TrailAmount::Percent(percent)),
        (None, None) => None,
    };

    if let Some(trail) = trail {
        let has_fixed_stop = draft
            .stop_loss
            .as_ref()
            .is_some_and(|leg| leg.stop_price.is_some());
        if has_fixed_stop {
            return Err(ValidationError::ambiguous_trail_spec(
                "A fixed stop price and a trailing distance are mutually exclusive",
            ));
        }
        return Ok(StopLossLeg::Trailing { trail });
    }

    let leg = draft
        .stop_loss
        .as_ref()
        .ok_or_else(|| incomplete("Stop-loss leg is missing".to_string()))?;
    let stop_price = leg
        .stop_price
        .ok_or_else(|| incomplete("Stop-loss leg requires a stop price".to_string()))?;
    Ok(StopLossLeg::Fixed {
        stop_price,
        limit_price: leg.limit_price,
    })
}
