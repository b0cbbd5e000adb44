//! MapQuote configuration
//!
//! Sources, later ones winning:
//! 1. built-in defaults
//! 2. `mapquote.{toml,json,yaml}` in the working directory, or the file given with `--config`
//! 3. `MAPQUOTE__`-prefixed environment variables (also read from `.env`),
//!    e.g. `MAPQUOTE__ENGINE__FEATURE_DAYS=per_feature`

use std::path::Path;

use anyhow::{Context, Result};
use mapquote_common::{DeliveryBounds, MapQuoteError, SizeBounds};
use mapquote_engine::{CatalogEntry, DeliveryPolicy, EngineConfig, FeatureCatalog};
use serde::{Deserialize, Serialize};

/// Default configuration file name, without extension
const DEFAULT_FILE: &str = "mapquote";

/// Environment variable prefix
const ENV_PREFIX: &str = "MAPQUOTE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Pricing curve and policies
    pub engine: EngineConfig,
    /// Allowed map sides
    pub size: SizeBounds,
    /// Replacement feature catalog; empty means the built-in one
    pub catalog: Vec<CatalogEntry>,
}

impl AppConfig {
    /// Load configuration from defaults, file and environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let _ = dotenvy::dotenv();

        let file = match path {
            Some(path) => config::File::from(path),
            None => config::File::with_name(DEFAULT_FILE).required(false),
        };

        let cfg: AppConfig = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Failed to parse configuration")?;

        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject bounds the engine cannot work with
    pub fn validate(&self) -> Result<(), MapQuoteError> {
        self.size.validate()?;
        self.delivery_bounds().validate()?;
        if self.engine.base.price_step <= 0.0 {
            return Err(MapQuoteError::Config(format!(
                "price_step must be positive, got {}",
                self.engine.base.price_step
            )));
        }
        Ok(())
    }

    /// Catalog to build fresh orders from
    pub fn catalog(&self) -> Result<FeatureCatalog, MapQuoteError> {
        if self.catalog.is_empty() {
            Ok(FeatureCatalog::default())
        } else {
            FeatureCatalog::new(self.catalog.clone())
        }
    }

    fn delivery_bounds(&self) -> DeliveryBounds {
        match &self.engine.delivery {
            DeliveryPolicy::Adjustable(settings) => settings.bounds.clone(),
            DeliveryPolicy::Recommended => DeliveryBounds::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapquote_engine::FeatureDaysPolicy;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("mapquote-{}-{name}", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults_are_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.engine.base.coefficient, 26.58);
        assert_eq!(cfg.size.max, 35_000.0);
        assert_eq!(cfg.catalog().unwrap().entries().len(), 13);
    }

    #[test]
    fn test_load_from_file() {
        let path = write_temp(
            "engine.json",
            r#"{
                "engine": {
                    "feature_days": "per_feature",
                    "delivery": { "mode": "adjustable", "per_day_rate": 8.0 }
                },
                "size": { "max": 20000.0 }
            }"#,
        );

        let cfg = AppConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(cfg.engine.feature_days, FeatureDaysPolicy::PerFeature);
        assert_eq!(cfg.size.max, 20_000.0);
        assert_eq!(cfg.size.min, 100.0);
        match cfg.engine.delivery {
            DeliveryPolicy::Adjustable(settings) => {
                assert_eq!(settings.per_day_rate, 8.0);
                assert_eq!(settings.minimum_total, 30.0);
            }
            other => panic!("unexpected delivery policy {other:?}"),
        }
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let cfg = AppConfig {
            size: SizeBounds {
                min: 5_000.0,
                max: 1_000.0,
                ..SizeBounds::default()
            },
            ..AppConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(MapQuoteError::Input(_))));
    }

    #[test]
    fn test_custom_catalog() {
        let cfg = AppConfig {
            catalog: vec![CatalogEntry {
                path: "structures.towers".to_string(),
                name: "Towers".to_string(),
                price_per_unit: 25.0,
                days_per_unit: 1.0,
                description: String::new(),
            }],
            ..AppConfig::default()
        };
        let catalog = cfg.catalog().unwrap();
        assert_eq!(catalog.entries().len(), 1);
    }
}
