//! Structured errors for draft validation and preview pricing.
//!
//! Every failure the engine can report is one of the enumerated
//! [`ValidationErrorKind`]s. A failure is always scoped to a single
//! order: within a batch it is carried as an [`OrderError`] annotated
//! with the draft's index, and it never aborts siblings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Enumerated validation failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    /// Quantity is missing, zero, negative, or not an integer.
    InvalidQuantity,
    /// Limit or stop-limit order without a limit price.
    MissingLimitPrice,
    /// Option order missing option type, strike, or expiration.
    IncompleteOptionSpec,
    /// Bracket order missing its take-profit or stop-loss leg.
    IncompleteBracketLegs,
    /// OCO order without exactly two valid exit legs.
    IncompleteOcoLegs,
    /// Trailing stop with both or neither of trail price / trail percent.
    AmbiguousTrailSpec,
    /// Profit or loss leg on the wrong side of the entry price.
    InvalidPriceCombination,
}

impl ValidationErrorKind {
    /// Get the stable reason string for this kind.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidQuantity => "INVALID_QUANTITY",
            Self::MissingLimitPrice => "MISSING_LIMIT_PRICE",
            Self::IncompleteOptionSpec => "INCOMPLETE_OPTION_SPEC",
            Self::IncompleteBracketLegs => "INCOMPLETE_BRACKET_LEGS",
            Self::IncompleteOcoLegs => "INCOMPLETE_OCO_LEGS",
            Self::AmbiguousTrailSpec => "AMBIGUOUS_TRAIL_SPEC",
            Self::InvalidPriceCombination => "INVALID_PRICE_COMBINATION",
        }
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A validation failure for a single order draft.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("[{kind}] {message}")]
pub struct ValidationError {
    /// Failure kind.
    pub kind: ValidationErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    #[must_use]
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Quantity is not a positive integer.
    #[must_use]
    pub fn invalid_quantity(quantity: i64) -> Self {
        Self::new(
            ValidationErrorKind::InvalidQuantity,
            format!("Quantity must be a positive integer, got {quantity}"),
        )
    }

    /// Limit price required for this order type.
    #[must_use]
    pub fn missing_limit_price(order_type: &str) -> Self {
        Self::new(
            ValidationErrorKind::MissingLimitPrice,
            format!("{order_type} orders require a limit price"),
        )
    }

    /// Option order missing one or more option fields.
    #[must_use]
    pub fn incomplete_option_spec(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::IncompleteOptionSpec, message)
    }

    /// Bracket order missing a leg.
    #[must_use]
    pub fn incomplete_bracket_legs(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::IncompleteBracketLegs, message)
    }

    /// OCO order missing or carrying an incomplete exit leg.
    #[must_use]
    pub fn incomplete_oco_legs(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::IncompleteOcoLegs, message)
    }

    /// Trailing stop specification is ambiguous.
    #[must_use]
    pub fn ambiguous_trail_spec(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::AmbiguousTrailSpec, message)
    }

    /// Exit leg sits on the wrong side of the entry price.
    #[must_use]
    pub fn invalid_price_combination(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::InvalidPriceCombination, message)
    }
}

/// A validation failure annotated with the draft's position in its batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderError {
    /// Zero-based index of the failing draft within the request batch.
    pub index: usize,
    /// Failure kind.
    pub kind: ValidationErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl OrderError {
    /// Attach a batch index to a validation error.
    #[must_use]
    pub fn at_index(index: usize, error: ValidationError) -> Self {
        Self {
            index,
            kind: error.kind,
            message: error.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_reason_strings() {
        assert_eq!(ValidationErrorKind::InvalidQuantity.reason(), "INVALID_QUANTITY");
        assert_eq!(
            ValidationErrorKind::InvalidPriceCombination.reason(),
            "INVALID_PRICE_COMBINATION"
        );
        assert_eq!(
            ValidationErrorKind::AmbiguousTrailSpec.reason(),
            "AMBIGUOUS_TRAIL_SPEC"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::invalid_quantity(-3);
        assert_eq!(
            err.to_string(),
            "[INVALID_QUANTITY] Quantity must be a positive integer, got -3"
        );

        let err = ValidationError::missing_limit_price("LIMIT");
        assert_eq!(
            err.to_string(),
            "[MISSING_LIMIT_PRICE] LIMIT orders require a limit price"
        );
    }

    #[test]
    fn test_kind_serde_screaming_snake() {
        let json = serde_json::to_string(&ValidationErrorKind::IncompleteBracketLegs).unwrap();
        assert_eq!(json, "\"INCOMPLETE_BRACKET_LEGS\"");
        let parsed: ValidationErrorKind = serde_json::from_str("\"MISSING_LIMIT_PRICE\"").unwrap();
        assert_eq!(parsed, ValidationErrorKind::MissingLimitPrice);
    }

    #[test]
    fn test_order_error_at_index() {
        let err = OrderError::at_index(2, ValidationError::incomplete_oco_legs("missing leg"));
        assert_eq!(err.index, 2);
        assert_eq!(err.kind, ValidationErrorKind::IncompleteOcoLegs);
        assert_eq!(err.message, "missing leg");
    }
}
