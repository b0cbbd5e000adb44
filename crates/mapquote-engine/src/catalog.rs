//! Feature catalog
//!
//! Static list of orderable features with their default unit price, unit
//! days and description. Only used to build fresh orders; the engine never
//! reads it while computing.

use mapquote_common::{
    Feature, FeatureEntry, FeaturePath, FeatureSet, MapSize, OrderConfig, Result, SizeBounds,
};
use serde::{Deserialize, Serialize};

/// One orderable feature with its defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Textual [`FeaturePath`], e.g. `structures.villages`
    pub path: String,
    pub name: String,
    pub price_per_unit: f64,
    pub days_per_unit: f64,
    #[serde(default)]
    pub description: String,
}

impl CatalogEntry {
    fn new(path: &str, name: &str, price_per_unit: f64, days_per_unit: f64, description: &str) -> Self {
        Self {
            path: path.to_string(),
            name: name.to_string(),
            price_per_unit,
            days_per_unit,
            description: description.to_string(),
        }
    }
}

/// Validated catalog and the disabled feature set it expands to
#[derive(Debug, Clone)]
pub struct FeatureCatalog {
    entries: Vec<CatalogEntry>,
    template: FeatureSet,
}

impl FeatureCatalog {
    /// Validate entries: paths must parse, be unique, and name at most one custom entry
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let template = Self::expand(&entries)?;
        Ok(Self { entries, template })
    }

    fn expand(entries: &[CatalogEntry]) -> Result<FeatureSet> {
        let mut template = FeatureSet::new();
        for entry in entries {
            let path: FeaturePath = entry.path.parse()?;
            let feature = Feature::new(&entry.name, entry.price_per_unit, entry.days_per_unit)
                .with_description(&entry.description);
            template.push(FeatureEntry::new(path, feature))?;
        }
        Ok(template)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Every catalog feature, disabled, quantity 1
    pub fn feature_set(&self) -> FeatureSet {
        self.template.clone()
    }

    /// Session-start order: default square size, all features disabled
    pub fn fresh_order(&self, bounds: &SizeBounds) -> OrderConfig {
        let size = MapSize::default_for(bounds);
        OrderConfig {
            features: self.feature_set(),
            ..OrderConfig::new(size.width, size.length)
        }
    }

    fn default_entries() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new(
                "custom_caves",
                "Custom Caves",
                150.0,
                2.0,
                "Specially designed cave systems with unique layouts and vanilla biomes",
            ),
            CatalogEntry::new(
                "custom_biomes",
                "Custom Biomes",
                70.0,
                3.0,
                "Unique biomes crafted to your specifications",
            ),
            CatalogEntry::new(
                "structures.villages",
                "Villages",
                40.0,
                2.0,
                "Custom designed villages (7 small builds) with unique architecture",
            ),
            CatalogEntry::new(
                "structures.strongholds",
                "Strongholds",
                60.0,
                2.0,
                "End portals and strongholds in the world",
            ),
            CatalogEntry::new(
                "structures.nether_portals",
                "Nether Portals",
                30.0,
                1.0,
                "Adding custom nether portals to the world",
            ),
            CatalogEntry::new(
                "custom_mods",
                "Custom Mods Support",
                100.0,
                4.0,
                "Create a map using blocks from mods",
            ),
            CatalogEntry::new(
                "terrain_sculpting",
                "Custom Terrain Sculpting",
                10.0,
                1.0,
                "Hand-detailed areas like mountains, waterfalls, or cliffs (150x150 blocks per unit)",
            ),
            CatalogEntry::new(
                "seasonal_variants",
                "Seasonal Variants",
                10.0,
                1.0,
                "Seasonal styling for a 1000x1000 blocks area",
            ),
            CatalogEntry::new(
                "ore_generation",
                "Custom Ore Generation",
                0.0,
                0.0,
                "Balanced ore placement throughout the map",
            ),
            CatalogEntry::new(
                "underground_biomes",
                "Underground Biomes",
                30.0,
                5.0,
                "Underground biomes like crystal caves or underground forests (500x500 blocks per unit)",
            ),
            CatalogEntry::new(
                "survival_friendly",
                "Survival-Friendly",
                0.0,
                0.0,
                "Map optimized for survival gameplay without high-end blocks",
            ),
            CatalogEntry::new(
                "floating_islands",
                "Floating Islands",
                30.0,
                5.0,
                "Floating islands with unique biomes (500x500 blocks per unit)",
            ),
            CatalogEntry::new(
                "custom",
                "Custom Feature",
                0.0,
                0.0,
                "Custom feature with manual price and time settings",
            ),
        ]
    }
}

impl Default for FeatureCatalog {
    fn default() -> Self {
        let entries = Self::default_entries();
        let template = Self::expand(&entries).expect("built-in catalog entries are valid");
        Self { entries, template }
    }
}
