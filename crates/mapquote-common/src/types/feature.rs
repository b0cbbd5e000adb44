//! Feature entries - optional, togglable line items of an order
//!
//! Each entry carries a quantity, a unit price and a unit duration. Grouping
//! (general features, structures, the single free-form custom entry) only
//! affects addressing and display; pricing treats the set as one flat list.
//!
//! Updates never mutate in place: [`Feature::apply`] and [`FeatureSet::with_edit`]
//! return new values with exactly the addressed field changed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FeatureError;
use crate::input;

/// Path segment for entries in the structures group
const STRUCTURES_SEGMENT: &str = "structures";

/// Key of the single free-form entry
const CUSTOM_KEY: &str = "custom";

/// Display grouping of a feature entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureGroup {
    /// Top-level features
    General,
    /// Entries nested under "structures"
    Structures,
    /// The free-form, user-named entry
    Custom,
}

/// A togglable line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Whether the feature is part of the order
    pub enabled: bool,
    /// Units ordered; kept while disabled so re-enabling restores it
    pub quantity: u32,
    /// Price of one unit
    pub price_per_unit: f64,
    /// Delivery days of one unit
    pub days_per_unit: f64,
    /// Display label
    pub name: String,
    /// Catalog description
    #[serde(default)]
    pub description: String,
}

impl Feature {
    /// Disabled feature with a quantity of one
    pub fn new(name: impl Into<String>, price_per_unit: f64, days_per_unit: f64) -> Self {
        Self {
            enabled: false,
            quantity: 1,
            price_per_unit,
            days_per_unit,
            name: name.into(),
            description: String::new(),
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Enable with the given quantity
    pub fn enabled_with(mut self, quantity: u32) -> Self {
        self.enabled = true;
        self.quantity = quantity;
        self
    }

    /// `price_per_unit × quantity` while enabled, otherwise 0
    pub fn extra_price(&self) -> f64 {
        if self.enabled {
            self.price_per_unit * f64::from(self.quantity)
        } else {
            0.0
        }
    }

    /// New feature with one field replaced
    pub fn apply(&self, edit: &FeatureEdit) -> Feature {
        let mut next = self.clone();
        match edit {
            FeatureEdit::Enabled(enabled) => next.enabled = *enabled,
            FeatureEdit::Quantity(quantity) => next.quantity = *quantity,
            FeatureEdit::PricePerUnit(price) => next.price_per_unit = *price,
            FeatureEdit::DaysPerUnit(days) => next.days_per_unit = *days,
            FeatureEdit::Name(name) => next.name = name.clone(),
        }
        next
    }
}

/// A single-field update to a feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FeatureEdit {
    Enabled(bool),
    Quantity(u32),
    PricePerUnit(f64),
    DaysPerUnit(f64),
    Name(String),
}

impl FeatureEdit {
    /// Quantity from edit-box text (at least 1)
    pub fn quantity_text(text: &str) -> Self {
        FeatureEdit::Quantity(input::parse_quantity(text))
    }

    /// Unit price from edit-box text (at least 0)
    pub fn price_text(text: &str) -> Self {
        FeatureEdit::PricePerUnit(input::parse_price(text))
    }

    /// Unit days from edit-box text (whole days, at least 0)
    pub fn days_text(text: &str) -> Self {
        FeatureEdit::DaysPerUnit(input::parse_days(text))
    }
}

/// Address of one entry in a [`FeatureSet`]
///
/// Textual form: `custom_caves`, `structures.villages`, `custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeaturePath {
    pub group: FeatureGroup,
    pub key: String,
}

impl FeaturePath {
    pub fn general(key: impl Into<String>) -> Self {
        Self {
            group: FeatureGroup::General,
            key: key.into(),
        }
    }

    pub fn structure(key: impl Into<String>) -> Self {
        Self {
            group: FeatureGroup::Structures,
            key: key.into(),
        }
    }

    pub fn custom() -> Self {
        Self {
            group: FeatureGroup::Custom,
            key: CUSTOM_KEY.to_string(),
        }
    }
}

impl fmt::Display for FeaturePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.group {
            FeatureGroup::General => write!(f, "{}", self.key),
            FeatureGroup::Structures => write!(f, "{}.{}", STRUCTURES_SEGMENT, self.key),
            FeatureGroup::Custom => write!(f, "{}", CUSTOM_KEY),
        }
    }
}

impl FromStr for FeaturePath {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || FeatureError::InvalidPath(s.to_string());

        let path = match s.split_once('.') {
            Some((STRUCTURES_SEGMENT, key)) => FeaturePath::structure(key),
            Some(_) => return Err(invalid()),
            None if s == CUSTOM_KEY => FeaturePath::custom(),
            None => FeaturePath::general(s),
        };

        if path.is_well_formed() {
            Ok(path)
        } else {
            Err(invalid())
        }
    }
}

impl FeaturePath {
    /// Whether the path survives a print-then-parse cycle unchanged
    fn is_well_formed(&self) -> bool {
        match self.group {
            FeatureGroup::Custom => self.key == CUSTOM_KEY,
            FeatureGroup::General => is_valid_key(&self.key) && self.key != CUSTOM_KEY,
            FeatureGroup::Structures => is_valid_key(&self.key),
        }
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// A feature together with its address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureEntry {
    pub key: String,
    pub group: FeatureGroup,
    pub feature: Feature,
}

impl FeatureEntry {
    pub fn new(path: FeaturePath, feature: Feature) -> Self {
        Self {
            key: path.key,
            group: path.group,
            feature,
        }
    }

    pub fn path(&self) -> FeaturePath {
        FeaturePath {
            group: self.group,
            key: self.key.clone(),
        }
    }

    fn matches(&self, path: &FeaturePath) -> bool {
        self.group == path.group && self.key == path.key
    }
}

/// Ordered collection of feature entries
///
/// Paths are unique and at most one entry belongs to [`FeatureGroup::Custom`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<FeatureEntry>", into = "Vec<FeatureEntry>")]
pub struct FeatureSet {
    entries: Vec<FeatureEntry>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, rejecting malformed keys, duplicate paths and a second custom entry
    pub fn push(&mut self, entry: FeatureEntry) -> Result<(), FeatureError> {
        if !entry.path().is_well_formed() {
            return Err(FeatureError::InvalidPath(entry.key));
        }
        if entry.group == FeatureGroup::Custom && self.custom().is_some() {
            return Err(FeatureError::MultipleCustom);
        }
        let path = entry.path();
        if self.get(&path).is_some() {
            return Err(FeatureError::Duplicate(path.to_string()));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// All entries in order, groups flattened
    pub fn iter(&self) -> impl Iterator<Item = &FeatureEntry> {
        self.entries.iter()
    }

    /// Enabled entries in order
    pub fn enabled(&self) -> impl Iterator<Item = &FeatureEntry> {
        self.entries.iter().filter(|entry| entry.feature.enabled)
    }

    pub fn get(&self, path: &FeaturePath) -> Option<&Feature> {
        self.entries
            .iter()
            .find(|entry| entry.matches(path))
            .map(|entry| &entry.feature)
    }

    /// The free-form entry, if present
    pub fn custom(&self) -> Option<&Feature> {
        self.entries
            .iter()
            .find(|entry| entry.group == FeatureGroup::Custom)
            .map(|entry| &entry.feature)
    }

    /// New set with the entry at `path` patched
    pub fn with_edit(&self, path: &FeaturePath, edit: &FeatureEdit) -> Result<FeatureSet, FeatureError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.matches(path))
            .ok_or_else(|| FeatureError::UnknownPath(path.to_string()))?;

        let mut entries = self.entries.clone();
        entries[index].feature = entries[index].feature.apply(edit);
        Ok(FeatureSet { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<FeatureEntry>> for FeatureSet {
    type Error = FeatureError;

    fn try_from(entries: Vec<FeatureEntry>) -> Result<Self, Self::Error> {
        let mut set = FeatureSet::new();
        for entry in entries {
            set.push(entry)?;
        }
        Ok(set)
    }
}

impl From<FeatureSet> for Vec<FeatureEntry> {
    fn from(set: FeatureSet) -> Self {
        set.entries
    }
}
