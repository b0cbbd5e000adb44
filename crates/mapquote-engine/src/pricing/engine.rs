//! Pricing engine
//!
//! Combines the area-based base quote with feature contributions and applies
//! the delivery policy. The engine only reads its immutable [`EngineConfig`];
//! every call is independent of every other call.

use mapquote_common::{FeatureGroup, OrderConfig, PricingResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::base::{BasePolicy, BaseQuote};
use super::delivery::DeliveryPolicy;
use super::features::{FeatureDaysPolicy, FeatureTotals};
use super::formula::FormulaBreakdown;
use super::rounding::round_half_up;

/// Label used for an unnamed custom feature
const UNNAMED_CUSTOM: &str = "Custom";

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Area pricing curve
    pub base: BasePolicy,
    /// Feature day contribution rule
    pub feature_days: FeatureDaysPolicy,
    /// Final assembly rule
    pub delivery: DeliveryPolicy,
}

/// Stateless price/time calculator
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: EngineConfig,
}

/// One enabled feature as shown on a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub path: String,
    pub label: String,
    pub quantity: u32,
    pub price: f64,
    pub days: f64,
}

/// A computed result together with everything needed to explain it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub result: PricingResult,
    pub formula: FormulaBreakdown,
    pub lines: Vec<QuoteLine>,
    pub extra_price: f64,
    pub extra_days: f64,
    /// Price change from a requested delivery time (0 unless adjustable)
    pub delivery_adjustment: f64,
}

impl PricingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Area-only price and time
    pub fn compute_base(&self, width: f64, length: f64) -> BaseQuote {
        self.config.base.compute(width, length)
    }

    /// Extra price and days of all enabled features
    pub fn aggregate_features(&self, order: &OrderConfig) -> FeatureTotals {
        FeatureTotals::aggregate(&order.features, self.config.feature_days)
    }

    /// Price and delivery estimate for an order
    pub fn compute(&self, order: &OrderConfig) -> PricingResult {
        self.assemble(order).0
    }

    /// Result plus formula breakdown and per-feature lines
    pub fn quote(&self, order: &OrderConfig) -> Quote {
        let (result, base, totals, adjustment) = self.assemble(order);
        let policy = self.config.feature_days;

        let lines = order
            .features
            .enabled()
            .map(|entry| QuoteLine {
                path: entry.path().to_string(),
                label: match entry.group {
                    FeatureGroup::Custom if entry.feature.name.trim().is_empty() => {
                        UNNAMED_CUSTOM.to_string()
                    }
                    _ => entry.feature.name.clone(),
                },
                quantity: entry.feature.quantity,
                price: entry.feature.extra_price(),
                days: policy.days_of(&entry.feature),
            })
            .collect();

        debug!(
            total_price = result.total_price,
            total_days = result.total_days,
            features = totals.enabled_count,
            "Quote assembled"
        );

        Quote {
            result,
            formula: FormulaBreakdown::new(order.size(), &base),
            lines,
            extra_price: totals.extra_price,
            extra_days: totals.extra_days,
            delivery_adjustment: adjustment,
        }
    }

    fn assemble(&self, order: &OrderConfig) -> (PricingResult, BaseQuote, FeatureTotals, f64) {
        let base = self.compute_base(order.width, order.length);
        let totals = self.aggregate_features(order);

        let subtotal = base.base_price + totals.extra_price;
        let target_days = base.recommended_days + round_half_up(totals.extra_days);
        let settled = self
            .config
            .delivery
            .settle(subtotal, target_days, order.delivery_days);

        let result = PricingResult {
            area: base.area,
            base_price: base.base_price,
            recommended_days: base.recommended_days,
            total_price: settled.total_price,
            total_days: settled.total_days,
        };

        trace!(
            area = result.area,
            base_price = result.base_price,
            extra_price = totals.extra_price,
            total_price = result.total_price,
            total_days = result.total_days,
            "Computed price"
        );
        if !result.is_displayable() {
            debug!(width = order.width, length = order.length, "Non-finite pricing result");
        }

        (result, base, totals, settled.adjustment)
    }
}
