use mapquote_common::{Feature, FeatureEntry, FeaturePath, FeatureSet, OrderConfig};
use mapquote_engine::{BasePolicy, PricingEngine};
use proptest::prelude::*;

fn features_strategy() -> impl Strategy<Value = FeatureSet> {
    proptest::collection::vec(
        (any::<bool>(), 0u32..20, 0.0f64..500.0, 0.0f64..10.0),
        0..12,
    )
    .prop_map(|specs| {
        let entries: Vec<FeatureEntry> = specs
            .into_iter()
            .enumerate()
            .map(|(i, (enabled, quantity, price, days))| {
                let feature = Feature {
                    enabled,
                    quantity,
                    ..Feature::new(format!("Feature {i}"), price, days)
                };
                FeatureEntry::new(FeaturePath::general(format!("feature_{i}")), feature)
            })
            .collect();
        FeatureSet::try_from(entries).unwrap()
    })
}

fn order_strategy() -> impl Strategy<Value = OrderConfig> {
    (100.0f64..=35_000.0, 100.0f64..=35_000.0, features_strategy()).prop_map(
        |(width, length, features)| OrderConfig {
            features,
            ..OrderConfig::new(width, length)
        },
    )
}

proptest! {
    #[test]
    fn recommended_days_never_below_floor(width in 0.0f64..=35_000.0, length in 0.0f64..=35_000.0) {
        let base = BasePolicy::default().compute(width, length);
        prop_assert!(base.recommended_days >= 5.0);
    }

    #[test]
    fn base_price_monotonic_within_surcharge_band(
        a in (100.0f64..=35_000.0, 100.0f64..=35_000.0),
        b in (100.0f64..=35_000.0, 100.0f64..=35_000.0),
    ) {
        let policy = BasePolicy::default();
        let (small, large) = if a.0 * a.1 <= b.0 * b.1 { (a, b) } else { (b, a) };
        let small = policy.compute(small.0, small.1);
        let large = policy.compute(large.0, large.1);

        prop_assert!(small.raw_price <= large.raw_price * (1.0 + 1e-12));
        if small.surcharge_applied == large.surcharge_applied {
            prop_assert!(small.base_price <= large.base_price);
        }
    }

    #[test]
    fn compute_is_repeatable(order in order_strategy()) {
        let engine = PricingEngine::default();
        let first = engine.compute(&order);
        let second = engine.compute(&order);
        prop_assert!(first.bit_eq(&second));

        // a separately constructed engine agrees as well
        prop_assert!(PricingEngine::default().compute(&order).bit_eq(&first));
    }

    #[test]
    fn totals_respect_invariants(order in order_strategy()) {
        let result = PricingEngine::default().compute(&order);

        prop_assert!(result.total_price >= 0.0);
        prop_assert!(result.total_days >= result.recommended_days);
        prop_assert!(result.total_price >= result.base_price);
        prop_assert_eq!(result.total_price, result.total_price.round());
    }

    #[test]
    fn disabled_features_are_free(order in order_strategy()) {
        let entries: Vec<FeatureEntry> = order
            .features
            .iter()
            .cloned()
            .map(|mut entry| {
                entry.feature.enabled = false;
                entry
            })
            .collect();
        let order = OrderConfig {
            features: FeatureSet::try_from(entries).unwrap(),
            ..order
        };

        let result = PricingEngine::default().compute(&order);
        prop_assert_eq!(result.total_price, result.base_price);
        prop_assert_eq!(result.total_days, result.recommended_days);
    }

    #[test]
    fn quote_agrees_with_compute(order in order_strategy()) {
        let engine = PricingEngine::default();
        let quote = engine.quote(&order);
        prop_assert!(quote.result.bit_eq(&engine.compute(&order)));
        prop_assert_eq!(quote.lines.len(), order.features.enabled().count());
    }
}
