//! Batch preview pipeline and aggregation.
//!
//! Drafts are validated and priced independently; a failure is scoped
//! to its own order and never aborts siblings. Work is fanned out with
//! rayon, tagged with the draft's original index, and reassembled so
//! output order always equals input order regardless of completion
//! order.

use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::error::{OrderError, ValidationError};
use crate::models::{OrderDraft, PreviewBreakdown, PreviewResponse};
use crate::risk::RiskCalculator;
use crate::validation::OrderDraftValidator;

/// Combines per-order breakdowns into a batch response.
///
/// Policy: totals sum the known values only, treating unknown entries
/// as contributing zero - while `unpriced_orders` records how many
/// breakdowns were excluded so partial totals are never silent.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewAggregator;

impl PreviewAggregator {
    /// Aggregate breakdowns and per-order errors into a response.
    /// Breakdown order is preserved, not sorted.
    #[must_use]
    pub fn aggregate(
        breakdowns: Vec<PreviewBreakdown>,
        errors: Vec<OrderError>,
    ) -> PreviewResponse {
        let total_notional = sum_known(&breakdowns, |b| b.notional);
        let total_max_profit = sum_known(&breakdowns, |b| b.max_profit);
        let total_max_loss = sum_known(&breakdowns, |b| b.max_loss);
        let unpriced_orders = breakdowns.iter().filter(|b| !b.is_priced()).count();

        PreviewResponse {
            total_notional,
            total_max_profit,
            total_max_loss,
            unpriced_orders,
            orders: breakdowns,
            errors,
        }
    }
}

fn sum_known(
    breakdowns: &[PreviewBreakdown],
    field: impl Fn(&PreviewBreakdown) -> Option<Decimal>,
) -> Decimal {
    breakdowns.iter().filter_map(field).sum()
}

/// Validates and prices batches of order drafts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewEngine {
    validator: OrderDraftValidator,
    calculator: RiskCalculator,
}

impl PreviewEngine {
    /// Create a new engine.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validator: OrderDraftValidator::new(),
            calculator: RiskCalculator::new(),
        }
    }

    /// Validate and price a single draft.
    ///
    /// The entry estimate is the draft's externally-supplied price
    /// when present, otherwise the validated entry limit price. Market
    /// and stop entries with no supplied estimate stay unpriced.
    ///
    /// # Errors
    /// Returns the draft's first validation failure, or
    /// `InvalidPriceCombination` from pricing.
    pub fn preview_order(&self, draft: &OrderDraft) -> Result<PreviewBreakdown, ValidationError> {
        let spec = self.validator.validate(draft)?;
        let entry_price = draft
            .estimated_entry_price
            .or_else(|| spec.pricing().limit_price());
        self.calculator.price(&spec, entry_price)
    }

    /// Validate, price, and aggregate a batch of drafts.
    ///
    /// Each draft is processed independently and in parallel; results
    /// are tagged with their input index and reassembled in input
    /// order.
    #[must_use]
    pub fn preview_batch(&self, drafts: &[OrderDraft]) -> PreviewResponse {
        let mut outcomes: Vec<(usize, Result<PreviewBreakdown, OrderError>)> = drafts
            .par_iter()
            .enumerate()
            .map(|(index, draft)| {
                let outcome = self
                    .preview_order(draft)
                    .map_err(|err| OrderError::at_index(index, err));
                (index, outcome)
            })
            .collect();
        outcomes.sort_unstable_by_key(|(index, _)| *index);

        let mut breakdowns = Vec::with_capacity(outcomes.len());
        let mut errors = Vec::new();
        for (_, outcome) in outcomes {
            match outcome {
                Ok(breakdown) => breakdowns.push(breakdown),
                Err(error) => errors.push(error),
            }
        }

        let response = PreviewAggregator::aggregate(breakdowns, errors);
        tracing::debug!(
            orders = response.orders.len(),
            errors = response.errors.len(),
            unpriced = response.unpriced_orders,
            %response.total_notional,
            "Previewed order batch"
        );
        response
    }
}
