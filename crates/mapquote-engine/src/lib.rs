//! # MapQuote Engine
//!
//! Pricing engine, feature catalog, and quote sessions for custom map orders.
//!
//! ## Pricing Formula
//!
//! ```text
//! A      = width × length / 10^6
//! P_base = round_10(26.58 × A^0.414 × (side ≥ 15000 ? 1.96 : 1))
//! T_rec  = max(5, round(0.21 × A))
//!
//! Price  = max(0, round(P_base + Σ price_i × qty_i))
//! Days   = T_rec + round(Σ days_i × qty_i)
//! ```
//!
//! Where:
//! - side: side of the square with the same area (`sqrt(width × length)`)
//! - i: enabled feature entries only
//!
//! [`PricingEngine::compute`] is pure: it holds no state between calls and
//! equal inputs give bit-identical outputs. Callers clamp sizes with
//! [`mapquote_common::SizeBounds`] before calling it.

pub mod catalog;
pub mod pricing;
pub mod session;
pub mod summary;

pub use catalog::{CatalogEntry, FeatureCatalog};
pub use pricing::{
    AdjustableDelivery, BasePolicy, BaseQuote, DeliveryPolicy, EngineConfig, FeatureDaysPolicy,
    FeatureTotals, FormulaBreakdown, PricingEngine, Quote, QuoteFingerprint, QuoteLine,
};
pub use session::{OrderSequence, QuoteSession, SessionEdit};
pub use summary::OrderSummary;
