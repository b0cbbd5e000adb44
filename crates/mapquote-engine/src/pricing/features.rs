//! Feature aggregation
//!
//! Folds every enabled entry of a [`FeatureSet`] into an extra price and extra
//! days. Groups are ignored; disabled entries contribute nothing whatever
//! their stored quantity, price or days.

use mapquote_common::{Feature, FeatureSet};
use serde::{Deserialize, Serialize};

/// How an enabled feature's unit days count toward delivery time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureDaysPolicy {
    /// `days_per_unit × quantity`
    #[default]
    PerUnit,
    /// `days_per_unit` once per enabled feature
    PerFeature,
}

impl FeatureDaysPolicy {
    /// Extra days of one feature
    pub fn days_of(&self, feature: &Feature) -> f64 {
        if !feature.enabled {
            return 0.0;
        }
        match self {
            FeatureDaysPolicy::PerUnit => feature.days_per_unit * f64::from(feature.quantity),
            FeatureDaysPolicy::PerFeature => feature.days_per_unit,
        }
    }
}

/// Unrounded feature contributions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureTotals {
    pub extra_price: f64,
    pub extra_days: f64,
    pub enabled_count: usize,
}

impl FeatureTotals {
    /// Sum contributions over the whole set
    pub fn aggregate(features: &FeatureSet, policy: FeatureDaysPolicy) -> Self {
        features
            .enabled()
            .fold(FeatureTotals::default(), |acc, entry| FeatureTotals {
                extra_price: acc.extra_price + entry.feature.extra_price(),
                extra_days: acc.extra_days + policy.days_of(&entry.feature),
                enabled_count: acc.enabled_count + 1,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapquote_common::{FeatureEntry, FeaturePath};

    fn set(entries: Vec<(FeaturePath, Feature)>) -> FeatureSet {
        FeatureSet::try_from(
            entries
                .into_iter()
                .map(|(path, feature)| FeatureEntry::new(path, feature))
                .collect::<Vec<_>>(),
        )
        .unwrap()
    }

    #[test]
    fn test_disabled_contributes_nothing() {
        let features = set(vec![(
            FeaturePath::general("custom_caves"),
            Feature {
                quantity: 9,
                ..Feature::new("Custom Caves", 150.0, 2.0)
            },
        )]);

        let totals = FeatureTotals::aggregate(&features, FeatureDaysPolicy::PerUnit);
        assert_eq!(totals, FeatureTotals::default());
    }

    #[test]
    fn test_all_groups_are_summed() {
        let features = set(vec![
            (
                FeaturePath::general("custom_caves"),
                Feature::new("Custom Caves", 150.0, 2.0).enabled_with(1),
            ),
            (
                FeaturePath::structure("villages"),
                Feature::new("Villages", 40.0, 2.0).enabled_with(3),
            ),
            (
                FeaturePath::custom(),
                Feature::new("Statue", 12.5, 0.5).enabled_with(2),
            ),
        ]);

        let totals = FeatureTotals::aggregate(&features, FeatureDaysPolicy::PerUnit);
        assert_eq!(totals.extra_price, 150.0 + 120.0 + 25.0);
        assert_eq!(totals.extra_days, 2.0 + 6.0 + 1.0);
        assert_eq!(totals.enabled_count, 3);
    }

    #[test]
    fn test_per_feature_days() {
        let features = set(vec![(
            FeaturePath::structure("villages"),
            Feature::new("Villages", 40.0, 2.0).enabled_with(3),
        )]);

        let totals = FeatureTotals::aggregate(&features, FeatureDaysPolicy::PerFeature);
        assert_eq!(totals.extra_price, 120.0);
        assert_eq!(totals.extra_days, 2.0);
    }

    #[test]
    fn test_zero_quantity_enabled() {
        let feature = Feature::new("Villages", 40.0, 2.0).enabled_with(0);
        assert_eq!(feature.extra_price(), 0.0);
        assert_eq!(FeatureDaysPolicy::PerUnit.days_of(&feature), 0.0);
        assert_eq!(FeatureDaysPolicy::PerFeature.days_of(&feature), 2.0);
    }
}
