//! Data model for the preview engine.
//!
//! Split between untrusted drafts (wire input), the canonical
//! [`OrderSpec`] produced by validation, and preview output types.

mod draft;
mod preview;
mod spec;

pub use draft::{
    AssetClass, OptionType, OrderClass, OrderDraft, OrderSide, OrderType, StopLossDraft,
    TakeProfitDraft,
};
pub use preview::{PreviewBreakdown, PreviewResponse};
pub use spec::{
    EntryPricing, ExitLeg, Instrument, OPTION_MULTIPLIER, OrderSpec, StopLossLeg, TakeProfitLeg,
    TrailAmount,
};
