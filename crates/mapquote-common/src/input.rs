//! Input coercion
//!
//! The pricing engine assumes finite, in-range numbers. Everything that turns
//! raw user input (slider positions, edit-box text) into such numbers lives
//! here, so callers clamp once before invoking the engine.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Allowed range for map width and length, in blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeBounds {
    /// Smallest accepted side
    pub min: f64,
    /// Largest accepted side
    pub max: f64,
    /// Side used for a fresh order
    pub default: f64,
    /// Slider positions a nearby value snaps to
    pub snap_points: Vec<f64>,
    /// Maximum distance from a snap point that still snaps
    pub snap_threshold: f64,
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self {
            min: 100.0,
            max: 35_000.0,
            default: 1_000.0,
            snap_points: vec![1_000.0, 5_000.0, 10_000.0, 20_000.0, 25_000.0],
            snap_threshold: 200.0,
        }
    }
}

impl SizeBounds {
    /// Check that `min <= default <= max`
    pub fn validate(&self) -> Result<(), InputError> {
        validate_range(self.min, self.max, self.default)
    }

    /// Clamp a side into `[min, max]`. NaN falls back to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        clamp_range(value, self.min, self.max)
    }

    /// Coerce edit-box text into a side. Empty or non-numeric text falls back to `min`.
    pub fn parse(&self, text: &str) -> f64 {
        match text.trim() {
            "" => self.min,
            trimmed => self.clamp(trimmed.parse::<f64>().unwrap_or(f64::NAN)),
        }
    }

    /// Snap a slider value to the closest snap point within the threshold, then clamp.
    pub fn snap(&self, value: f64) -> f64 {
        let snapped = self
            .snap_points
            .iter()
            .copied()
            .filter(|point| (value - point).abs() <= self.snap_threshold)
            .min_by(|a, b| {
                let da = (value - a).abs();
                let db = (value - b).abs();
                da.total_cmp(&db).then(a.total_cmp(b))
            })
            .unwrap_or(value);

        self.clamp(snapped)
    }
}

/// Allowed range for a user-chosen delivery time, in days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryBounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl Default for DeliveryBounds {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 120.0,
            default: 5.0,
        }
    }
}

impl DeliveryBounds {
    pub fn validate(&self) -> Result<(), InputError> {
        validate_range(self.min, self.max, self.default)
    }

    /// Clamp a day count into `[min, max]`. NaN falls back to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        clamp_range(value, self.min, self.max)
    }
}

/// Coerce quantity text: integer prefix, invalid input counts as 0, result at least 1
pub fn parse_quantity(text: &str) -> u32 {
    let parsed = parse_int_prefix(text).unwrap_or(0).max(1);
    u32::try_from(parsed).unwrap_or(u32::MAX)
}

/// Coerce unit price text: float prefix, invalid input counts as 0, result at least 0
pub fn parse_price(text: &str) -> f64 {
    match parse_float_prefix(text) {
        Some(v) if v.is_finite() => v.max(0.0),
        _ => 0.0,
    }
}

/// Coerce unit days text: integer prefix, invalid input counts as 0, result at least 0
pub fn parse_days(text: &str) -> f64 {
    parse_int_prefix(text).unwrap_or(0).max(0) as f64
}

fn validate_range(min: f64, max: f64, default: f64) -> Result<(), InputError> {
    if !(min.is_finite() && max.is_finite()) || min > max {
        return Err(InputError::InvalidBounds { min, max });
    }
    if !(min..=max).contains(&default) {
        return Err(InputError::DefaultOutOfRange { default, min, max });
    }
    Ok(())
}

fn clamp_range(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() || value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Leading signed integer, ignoring trailing garbage ("12abc" -> 12, "3.7" -> 3)
fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits = trimmed[sign_len..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    let prefix = &trimmed[..sign_len + digits];
    Some(prefix.parse::<i64>().unwrap_or(if prefix.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

/// Longest leading decimal number ("2.5kg" -> 2.5, "1e3x" -> 1000)
fn parse_float_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let candidate: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .collect();

    (1..=candidate.len())
        .rev()
        .find_map(|len| candidate[..len].parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_size() {
        let bounds = SizeBounds::default();
        assert_eq!(bounds.clamp(50.0), 100.0);
        assert_eq!(bounds.clamp(40_000.0), 35_000.0);
        assert_eq!(bounds.clamp(1_234.0), 1_234.0);
        assert_eq!(bounds.clamp(f64::NAN), 100.0);
        assert_eq!(bounds.clamp(f64::INFINITY), 35_000.0);
        assert_eq!(bounds.clamp(f64::NEG_INFINITY), 100.0);
    }

    #[test]
    fn test_parse_size_falls_back_to_min() {
        let bounds = SizeBounds::default();
        assert_eq!(bounds.parse(""), 100.0);
        assert_eq!(bounds.parse("   "), 100.0);
        assert_eq!(bounds.parse("abc"), 100.0);
        assert_eq!(bounds.parse("-5"), 100.0);
        assert_eq!(bounds.parse(" 2500 "), 2_500.0);
        assert_eq!(bounds.parse("99999"), 35_000.0);
    }

    #[test]
    fn test_snap() {
        let bounds = SizeBounds::default();
        assert_eq!(bounds.snap(4_850.0), 5_000.0);
        assert_eq!(bounds.snap(5_200.0), 5_000.0);
        assert_eq!(bounds.snap(5_201.0), 5_201.0);
        assert_eq!(bounds.snap(7_000.0), 7_000.0);
        assert_eq!(bounds.snap(50.0), 100.0);
    }

    #[test]
    fn test_snap_tie_prefers_lower_point() {
        let bounds = SizeBounds {
            snap_points: vec![1_200.0, 1_000.0],
            ..SizeBounds::default()
        };
        assert_eq!(bounds.snap(1_100.0), 1_000.0);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(SizeBounds::default().validate().is_ok());
        assert!(DeliveryBounds::default().validate().is_ok());

        let inverted = SizeBounds {
            min: 500.0,
            max: 100.0,
            ..SizeBounds::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(InputError::InvalidBounds { min: 500.0, max: 100.0 })
        );

        let outside = DeliveryBounds {
            default: 200.0,
            ..DeliveryBounds::default()
        };
        assert!(matches!(
            outside.validate(),
            Err(InputError::DefaultOutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity("3.9"), 3);
        assert_eq!(parse_quantity("12abc"), 12);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-4"), 1);
        assert_eq!(parse_quantity("x"), 1);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("40"), 40.0);
        assert_eq!(parse_price("12.5"), 12.5);
        assert_eq!(parse_price("2.5kg"), 2.5);
        assert_eq!(parse_price("-3"), 0.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("nan"), 0.0);
    }

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_days("4"), 4.0);
        assert_eq!(parse_days("4.5"), 4.0);
        assert_eq!(parse_days("-1"), 0.0);
        assert_eq!(parse_days("soon"), 0.0);
    }
}
