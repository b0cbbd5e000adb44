//! Delivery policy - how total days and price relate to a requested delivery time

use mapquote_common::DeliveryBounds;
use serde::{Deserialize, Serialize};

use super::rounding::{floor_at, round_half_up};

/// Final assembly rule for price and days
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DeliveryPolicy {
    /// Delivery is the recommended estimate plus feature days; no price effect
    #[default]
    Recommended,
    /// The customer picks a delivery time; rushing costs, slack saves
    Adjustable(AdjustableDelivery),
}

/// Settings of [`DeliveryPolicy::Adjustable`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustableDelivery {
    /// Price change per day of deviation from the target
    pub per_day_rate: f64,
    /// Lowest total price ever quoted
    pub minimum_total: f64,
    /// Range a requested delivery time is clamped to
    pub bounds: DeliveryBounds,
}

impl Default for AdjustableDelivery {
    fn default() -> Self {
        Self {
            per_day_rate: 6.0,
            minimum_total: 30.0,
            bounds: DeliveryBounds::default(),
        }
    }
}

/// Outcome of applying a delivery policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Settlement {
    pub total_price: f64,
    pub total_days: f64,
    pub adjustment: f64,
}

impl DeliveryPolicy {
    /// Combine the unrounded subtotal with the target days
    ///
    /// `target_days` is recommended days plus rounded feature days.
    pub(crate) fn settle(
        &self,
        subtotal: f64,
        target_days: f64,
        requested_days: Option<f64>,
    ) -> Settlement {
        match self {
            DeliveryPolicy::Recommended => Settlement {
                total_price: floor_at(0.0, round_half_up(subtotal)),
                total_days: target_days,
                adjustment: 0.0,
            },
            DeliveryPolicy::Adjustable(settings) => {
                let chosen = requested_days
                    .map(|days| settings.bounds.clamp(days))
                    .unwrap_or(target_days);
                let adjustment = (target_days - chosen) * settings.per_day_rate;

                Settlement {
                    total_price: floor_at(
                        settings.minimum_total,
                        round_half_up(subtotal + adjustment),
                    ),
                    total_days: chosen,
                    adjustment,
                }
            }
        }
    }
}
