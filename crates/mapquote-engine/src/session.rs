//! Quote session - the caller side of the engine
//!
//! Holds the current order and its result, applies one edit at a time, and
//! owns the order number sequence. Each edit builds a new `OrderConfig`,
//! computes its result, and only then replaces both, so the pair is never
//! observed half-updated and a rejected edit changes nothing.

use mapquote_common::{FeatureEdit, FeaturePath, OrderConfig, PricingResult, Result, SizeBounds};
use tracing::debug;

use crate::catalog::FeatureCatalog;
use crate::pricing::{PricingEngine, Quote, QuoteFingerprint};
use crate::summary::OrderSummary;

/// One user edit
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEdit {
    /// Width typed as a number, clamped
    Width(f64),
    /// Length typed as a number, clamped
    Length(f64),
    /// Width from a slider, snapped then clamped
    WidthSlider(f64),
    /// Length from a slider, snapped then clamped
    LengthSlider(f64),
    /// Width edit-box text; invalid text falls back to the minimum
    WidthText(String),
    /// Length edit-box text; invalid text falls back to the minimum
    LengthText(String),
    /// Requested delivery time (read by the adjustable delivery policy)
    DeliveryDays(Option<f64>),
    /// Single-field update of one feature
    Feature { path: FeaturePath, edit: FeatureEdit },
}

/// Monotonic order number source, owned by one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSequence {
    next: u64,
}

impl OrderSequence {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Number the next confirmed order will get
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Take a number and advance
    pub fn next_number(&mut self) -> u64 {
        let number = self.next;
        self.next = self.next.saturating_add(1);
        number
    }
}

impl Default for OrderSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Current order, its result, and the order sequence
pub struct QuoteSession {
    engine: PricingEngine,
    catalog: FeatureCatalog,
    bounds: SizeBounds,
    config: OrderConfig,
    result: PricingResult,
    sequence: OrderSequence,
}

impl QuoteSession {
    /// Start from the catalog's fresh order
    pub fn new(engine: PricingEngine, catalog: FeatureCatalog, bounds: SizeBounds) -> Self {
        let config = catalog.fresh_order(&bounds);
        let result = engine.compute(&config);
        Self {
            engine,
            catalog,
            bounds,
            config,
            result,
            sequence: OrderSequence::new(),
        }
    }

    /// Continue numbering from an existing sequence
    pub fn with_sequence(mut self, sequence: OrderSequence) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn config(&self) -> &OrderConfig {
        &self.config
    }

    pub fn result(&self) -> &PricingResult {
        &self.result
    }

    pub fn sequence(&self) -> &OrderSequence {
        &self.sequence
    }

    /// Full quote for the current order
    pub fn quote(&self) -> Quote {
        self.engine.quote(&self.config)
    }

    /// Apply one edit and recompute
    pub fn apply(&mut self, edit: SessionEdit) -> Result<&PricingResult> {
        let next = self.edited(&edit)?;
        let result = self.engine.compute(&next);

        debug!(
            ?edit,
            total_price = result.total_price,
            total_days = result.total_days,
            "Applied session edit"
        );

        self.config = next;
        self.result = result;
        Ok(&self.result)
    }

    /// Replace the whole order, e.g. with a previously saved one
    ///
    /// Sizes are clamped like any other edit; feature entries are taken as-is.
    pub fn restore(&mut self, order: OrderConfig) -> &PricingResult {
        let size = order.size().clamped(&self.bounds);
        let next = order.with_size(size.width, size.length);
        let result = self.engine.compute(&next);

        debug!(total_price = result.total_price, "Session restored");
        self.config = next;
        self.result = result;
        &self.result
    }

    /// Back to the fresh order; the order sequence keeps counting
    pub fn reset(&mut self) {
        self.config = self.catalog.fresh_order(&self.bounds);
        self.result = self.engine.compute(&self.config);
        debug!("Session reset");
    }

    /// Confirm the current order and draw its number
    pub fn confirm(&mut self) -> Result<OrderSummary> {
        let fingerprint = QuoteFingerprint::of(&self.config)?;
        let quote = self.quote();
        let number = self.sequence.next_number();

        debug!(order_number = number, %fingerprint, "Order confirmed");
        Ok(OrderSummary::new(number, &self.config, &quote, fingerprint))
    }

    fn edited(&self, edit: &SessionEdit) -> Result<OrderConfig> {
        let bounds = &self.bounds;
        let config = &self.config;

        Ok(match edit {
            SessionEdit::Width(v) => config.with_width(bounds.clamp(*v)),
            SessionEdit::Length(v) => config.with_length(bounds.clamp(*v)),
            SessionEdit::WidthSlider(v) => config.with_width(bounds.snap(*v)),
            SessionEdit::LengthSlider(v) => config.with_length(bounds.snap(*v)),
            SessionEdit::WidthText(text) => config.with_width(bounds.parse(text)),
            SessionEdit::LengthText(text) => config.with_length(bounds.parse(text)),
            SessionEdit::DeliveryDays(days) => config.with_delivery_days(*days),
            SessionEdit::Feature { path, edit } => config.with_feature(path, edit)?,
        })
    }
}
