// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Preview Engine - Rust Core Library
//!
//! Deterministic order validation and risk-preview engine.
//!
//! # Pipeline
//!
//! ```text
//! OrderDraft(s) -> OrderDraftValidator -> OrderSpec(s)
//!               -> RiskCalculator      -> PreviewBreakdown(s)
//!               -> PreviewAggregator   -> PreviewResponse
//! ```
//!
//! Each stage is a pure, synchronous transformation over immutable
//! values: no shared state, no I/O, nothing to cancel. Entry-price
//! estimates are supplied by the caller; the engine never fetches
//! prices. All money math is exact decimal arithmetic - binary floats
//! are never used for price, quantity, or ratio computation.
//!
//! # Modules
//!
//! - [`models`]: drafts, the canonical [`models::OrderSpec`] tagged
//!   union, and preview output types
//! - [`validation`]: draft-to-spec validation with deterministic rule
//!   order
//! - [`risk`]: notional / max profit / max loss / risk-reward pricing
//! - [`preview`]: batch pipeline and null-aware aggregation
//! - [`server`]: the HTTP/JSON boundary

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Runtime configuration.
pub mod config;

/// Structured validation errors.
pub mod error;

/// Order and preview data model.
pub mod models;

/// Batch preview pipeline and aggregation.
pub mod preview;

/// Risk-preview pricing.
pub mod risk;

/// HTTP/JSON API boundary.
pub mod server;

/// Tracing setup.
pub mod telemetry;

/// Draft validation.
pub mod validation;

pub use config::ServerConfig;
pub use error::{OrderError, ValidationError, ValidationErrorKind};
pub use models::{
    AssetClass, EntryPricing, ExitLeg, Instrument, OptionType, OrderClass, OrderDraft, OrderSide,
    OrderSpec, OrderType, PreviewBreakdown, PreviewResponse, StopLossDraft, StopLossLeg,
    TakeProfitDraft, TakeProfitLeg, TrailAmount,
};
pub use preview::{PreviewAggregator, PreviewEngine};
pub use risk::RiskCalculator;
pub use server::{PreviewRequest, PreviewServer, create_router};
pub use validation::OrderDraftValidator;
