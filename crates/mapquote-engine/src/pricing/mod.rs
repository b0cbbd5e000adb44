//! Pricing module
//!
//! Provides the pure price/time computation with:
//! - Area-based base price and recommended delivery time
//! - Flat aggregation of enabled feature entries
//! - Final assembly under a configurable delivery policy
//! - Formula breakdown and stable fingerprints for display

pub mod base;
pub mod delivery;
pub mod engine;
pub mod features;
pub mod fingerprint;
pub mod formula;

mod rounding;

pub use base::{BasePolicy, BaseQuote};
pub use delivery::{AdjustableDelivery, DeliveryPolicy};
pub use engine::{EngineConfig, PricingEngine, Quote, QuoteLine};
pub use features::{FeatureDaysPolicy, FeatureTotals};
pub use fingerprint::QuoteFingerprint;
pub use formula::FormulaBreakdown;
