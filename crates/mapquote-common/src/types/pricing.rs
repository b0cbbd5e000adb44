//! Pricing result - the derived output of a computation
//!
//! Never edited by hand: every field is a pure function of the
//! [`OrderConfig`](crate::OrderConfig) it was computed from.

use serde::{Deserialize, Serialize};

/// Price and delivery estimate for one order configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// width x length, in blocks
    pub area: f64,
    /// Price from area alone
    pub base_price: f64,
    /// Delivery estimate from area alone
    pub recommended_days: f64,
    /// Base price plus enabled features, rounded once
    pub total_price: f64,
    /// Recommended days plus feature days (or the chosen delivery time)
    pub total_days: f64,
}

impl PricingResult {
    /// Whether every field is a finite number
    ///
    /// Out-of-range input that slipped past clamping propagates as NaN or
    /// infinity; such a result cannot be shown as a quote.
    pub fn is_displayable(&self) -> bool {
        [
            self.area,
            self.base_price,
            self.recommended_days,
            self.total_price,
            self.total_days,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// Bitwise equality, treating NaN fields with equal bits as equal
    pub fn bit_eq(&self, other: &PricingResult) -> bool {
        self.area.to_bits() == other.area.to_bits()
            && self.base_price.to_bits() == other.base_price.to_bits()
            && self.recommended_days.to_bits() == other.recommended_days.to_bits()
            && self.total_price.to_bits() == other.total_price.to_bits()
            && self.total_days.to_bits() == other.total_days.to_bits()
    }
}
