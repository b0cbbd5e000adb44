//! Base price and recommended delivery time from map area
//!
//! ```text
//! A        = area / 10^6
//! raw      = k × A^p                       (k = 26.58, p = 0.414)
//! adjusted = raw × 1.96   if sqrt(area) ≥ 15000
//! base     = round_10(adjusted)
//! days     = max(5, round(0.21 × A))
//! ```
//!
//! The surcharge is a step: a square map of side 14999 gets none, one of side
//! 15000 gets the full multiplier.

use mapquote_common::MapSize;
use serde::{Deserialize, Serialize};

use super::rounding::{floor_at, round_half_up, round_to_step};

/// Constants of the area pricing curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasePolicy {
    /// Price of a one-million-block map (k)
    pub coefficient: f64,
    /// Growth exponent over area in millions (p)
    pub exponent: f64,
    /// Derived side at which the large-map surcharge applies
    pub surcharge_side: f64,
    /// Large-map surcharge multiplier
    pub surcharge_multiplier: f64,
    /// Base price rounding step
    pub price_step: f64,
    /// Minimum recommended delivery time
    pub min_days: f64,
    /// Recommended delivery days per million blocks
    pub days_per_million: f64,
}

impl Default for BasePolicy {
    fn default() -> Self {
        Self {
            coefficient: 26.58,
            exponent: 0.414,
            surcharge_side: 15_000.0,
            surcharge_multiplier: 1.96,
            price_step: 10.0,
            min_days: 5.0,
            days_per_million: 0.21,
        }
    }
}

/// Area-only pricing, with the intermediate values kept for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseQuote {
    pub area: f64,
    pub area_millions: f64,
    pub derived_side: f64,
    /// Power-law price before the surcharge
    pub raw_price: f64,
    /// Price after the surcharge, before rounding
    pub adjusted_price: f64,
    pub surcharge_applied: bool,
    pub base_price: f64,
    pub recommended_days: f64,
}

impl BasePolicy {
    /// Price and time from area alone
    ///
    /// Expects positive, finite sides. Anything else is not rejected: a
    /// negative area yields NaN so that the result is visibly unusable.
    pub fn compute(&self, width: f64, length: f64) -> BaseQuote {
        let size = MapSize::new(width, length);
        let area = size.area();
        let area_millions = size.area_millions();
        let derived_side = size.derived_side();

        let raw_price = self.coefficient * area_millions.powf(self.exponent);
        let surcharge_applied = derived_side >= self.surcharge_side;
        let adjusted_price = if surcharge_applied {
            raw_price * self.surcharge_multiplier
        } else {
            raw_price
        };

        BaseQuote {
            area,
            area_millions,
            derived_side,
            raw_price,
            adjusted_price,
            surcharge_applied,
            base_price: round_to_step(adjusted_price, self.price_step),
            recommended_days: floor_at(
                self.min_days,
                round_half_up(area_millions * self.days_per_million),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(width: f64, length: f64) -> BaseQuote {
        BasePolicy::default().compute(width, length)
    }

    #[test]
    fn test_one_million_blocks() {
        let quote = base(1_000.0, 1_000.0);
        assert_eq!(quote.area, 1_000_000.0);
        assert_eq!(quote.area_millions, 1.0);
        assert!((quote.raw_price - 26.58).abs() < 1e-12);
        assert!(!quote.surcharge_applied);
        assert_eq!(quote.base_price, 30.0);
        assert_eq!(quote.recommended_days, 5.0);
    }

    #[test]
    fn test_zero_area() {
        let quote = base(0.0, 1_000.0);
        assert_eq!(quote.raw_price, 0.0);
        assert_eq!(quote.base_price, 0.0);
        assert_eq!(quote.recommended_days, 5.0);
    }

    #[test]
    fn test_small_map_rounds_to_zero() {
        // 26.58 × 0.01^0.414 ≈ 3.95
        let quote = base(100.0, 100.0);
        assert_eq!(quote.base_price, 0.0);
        assert_eq!(quote.recommended_days, 5.0);
    }

    #[test]
    fn test_surcharge_step() {
        let below = base(14_999.0, 14_999.0);
        let at = base(15_000.0, 15_000.0);

        assert!(!below.surcharge_applied);
        assert!(at.surcharge_applied);
        assert_eq!(below.base_price, 250.0);
        assert_eq!(at.base_price, 490.0);

        let ratio = at.base_price / below.base_price;
        assert!((ratio - 1.96).abs() < 0.05, "ratio was {ratio}");
    }

    #[test]
    fn test_surcharge_uses_derived_side_not_width() {
        // sqrt(15000 × 14999) < 15000
        let quote = base(15_000.0, 14_999.0);
        assert!(!quote.surcharge_applied);
        assert_eq!(quote.base_price, 250.0);

        // sqrt(30000 × 7500) = 15000
        let quote = base(30_000.0, 7_500.0);
        assert!(quote.surcharge_applied);
    }

    #[test]
    fn test_surcharge_rounds_after_multiplier() {
        let quote = base(20_000.0, 20_000.0);
        assert!(quote.surcharge_applied);
        assert!((quote.adjusted_price - quote.raw_price * 1.96).abs() < 1e-9);
        // round_10(317.55 × 1.96) = 620, while round_10(317.55) × 1.96 = 627.2
        assert_eq!(quote.base_price, 620.0);
        assert_eq!(quote.recommended_days, 84.0);
    }

    #[test]
    fn test_recommended_days_linear_above_floor() {
        assert_eq!(base(10_000.0, 10_000.0).recommended_days, 21.0);
        assert_eq!(base(15_000.0, 15_000.0).recommended_days, 47.0);
        assert_eq!(base(35_000.0, 35_000.0).recommended_days, 257.0);
    }

    #[test]
    fn test_negative_area_is_nan() {
        let quote = base(-1_000.0, 1_000.0);
        assert!(quote.raw_price.is_nan());
        assert!(quote.base_price.is_nan());
        assert!(!quote.surcharge_applied);
    }

    #[test]
    fn test_non_finite_side_propagates() {
        let quote = base(f64::NAN, 1_000.0);
        assert!(quote.base_price.is_nan());
        assert!(quote.recommended_days.is_nan());
    }

    #[test]
    fn test_custom_policy() {
        let policy = BasePolicy {
            price_step: 1.0,
            surcharge_side: 1_000.0,
            surcharge_multiplier: 2.0,
            ..BasePolicy::default()
        };
        let quote = policy.compute(1_000.0, 1_000.0);
        // 26.58 × 2 = 53.16
        assert_eq!(quote.base_price, 53.0);
    }
}
