//! # MapQuote Common
//!
//! Shared types, input coercion, and errors for the MapQuote pricing calculator.
//!
//! ## Core Types
//!
//! - [`MapSize`]/[`SizeBounds`]: map dimensions in blocks and their allowed range
//! - [`Feature`]/[`FeatureSet`]: togglable line items with quantity, unit price and unit days
//! - [`FeaturePath`]/[`FeatureEdit`]: addressing and patching a single feature entry
//! - [`OrderConfig`]: the full input to the pricing engine
//! - [`PricingResult`]: the derived price and delivery estimate
//!
//! ## Input
//!
//! - [`input`]: clamping and text coercion applied before a value reaches the engine

pub mod error;
pub mod input;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{FeatureError, InputError, MapQuoteError, Result};
pub use input::{DeliveryBounds, SizeBounds};
pub use types::{
    feature::{Feature, FeatureEdit, FeatureEntry, FeatureGroup, FeaturePath, FeatureSet},
    map_size::MapSize,
    order::{OrderConfig, OrderConfigBuilder},
    pricing::PricingResult,
};

/// MapQuote version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Blocks per side of a world chunk
pub const CHUNK_SIDE: f64 = 16.0;

/// Blocks in one "million blocks" area unit
pub const BLOCKS_PER_MILLION: f64 = 1_000_000.0;
