//! Order configuration - the complete input to a price computation
//!
//! An `OrderConfig` is replaced wholesale on every edit. The `with_*` helpers
//! return a patched copy and never touch the receiver.

use serde::{Deserialize, Serialize};

use crate::error::{FeatureError, Result};
use crate::types::feature::{Feature, FeatureEdit, FeatureEntry, FeaturePath, FeatureSet};
use crate::types::map_size::MapSize;

/// Order input: map size, feature selection, optional requested delivery time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfig {
    /// Map width in blocks
    pub width: f64,
    /// Map length in blocks
    pub length: f64,
    /// All feature entries, enabled or not
    #[serde(default)]
    pub features: FeatureSet,
    /// Requested delivery time; only read by the adjustable delivery policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_days: Option<f64>,
}

impl OrderConfig {
    /// Order without features
    pub fn new(width: f64, length: f64) -> Self {
        Self {
            width,
            length,
            features: FeatureSet::new(),
            delivery_days: None,
        }
    }

    pub fn builder() -> OrderConfigBuilder {
        OrderConfigBuilder::default()
    }

    pub fn size(&self) -> MapSize {
        MapSize::new(self.width, self.length)
    }

    /// Copy with both sides replaced
    pub fn with_size(&self, width: f64, length: f64) -> OrderConfig {
        OrderConfig {
            width,
            length,
            ..self.clone()
        }
    }

    pub fn with_width(&self, width: f64) -> OrderConfig {
        self.with_size(width, self.length)
    }

    pub fn with_length(&self, length: f64) -> OrderConfig {
        self.with_size(self.width, length)
    }

    /// Copy with one field of one feature patched
    pub fn with_feature(&self, path: &FeaturePath, edit: &FeatureEdit) -> Result<OrderConfig> {
        Ok(OrderConfig {
            features: self.features.with_edit(path, edit)?,
            ..self.clone()
        })
    }

    /// Copy with the requested delivery time replaced
    pub fn with_delivery_days(&self, delivery_days: Option<f64>) -> OrderConfig {
        OrderConfig {
            delivery_days,
            ..self.clone()
        }
    }
}

/// Builder for [`OrderConfig`]
#[derive(Debug, Default)]
pub struct OrderConfigBuilder {
    width: f64,
    length: f64,
    features: FeatureSet,
    delivery_days: Option<f64>,
    error: Option<FeatureError>,
}

impl OrderConfigBuilder {
    /// Set map size
    pub fn size(mut self, width: f64, length: f64) -> Self {
        self.width = width;
        self.length = length;
        self
    }

    /// Add a feature entry
    pub fn feature(mut self, path: FeaturePath, feature: Feature) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.features.push(FeatureEntry::new(path, feature)) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Set requested delivery time
    pub fn delivery_days(mut self, days: f64) -> Self {
        self.delivery_days = Some(days);
        self
    }

    /// Finish, reporting the first feature error encountered
    pub fn build(self) -> Result<OrderConfig> {
        if let Some(e) = self.error {
            return Err(e.into());
        }
        Ok(OrderConfig {
            width: self.width,
            length: self.length,
            features: self.features,
            delivery_days: self.delivery_days,
        })
    }
}
