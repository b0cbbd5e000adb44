//! Map dimensions

use serde::{Deserialize, Serialize};

use crate::input::SizeBounds;
use crate::{BLOCKS_PER_MILLION, CHUNK_SIDE};

/// Rectangular map size in blocks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapSize {
    pub width: f64,
    pub length: f64,
}

impl MapSize {
    pub fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }

    /// Square map of the bounds' default side
    pub fn default_for(bounds: &SizeBounds) -> Self {
        Self::new(bounds.default, bounds.default)
    }

    /// Both sides clamped into `bounds`
    pub fn clamped(self, bounds: &SizeBounds) -> Self {
        Self::new(bounds.clamp(self.width), bounds.clamp(self.length))
    }

    /// Area in blocks
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Area in millions of blocks
    pub fn area_millions(&self) -> f64 {
        self.area() / BLOCKS_PER_MILLION
    }

    /// Side of the square with the same area
    pub fn derived_side(&self) -> f64 {
        self.area().sqrt()
    }

    /// Chunk grid covering the map as (wide, long)
    pub fn chunks(&self) -> (f64, f64) {
        (
            (self.width / CHUNK_SIDE).ceil(),
            (self.length / CHUNK_SIDE).ceil(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_units() {
        let size = MapSize::new(2_000.0, 3_000.0);
        assert_eq!(size.area(), 6_000_000.0);
        assert_eq!(size.area_millions(), 6.0);
    }

    #[test]
    fn test_derived_side() {
        assert_eq!(MapSize::new(15_000.0, 15_000.0).derived_side(), 15_000.0);
        assert!(MapSize::new(15_000.0, 14_999.0).derived_side() < 15_000.0);
    }

    #[test]
    fn test_chunks_round_up() {
        let (wide, long) = MapSize::new(1_000.0, 17.0).chunks();
        assert_eq!(wide, 63.0);
        assert_eq!(long, 2.0);
    }

    #[test]
    fn test_default_for() {
        let bounds = SizeBounds {
            default: 5_000.0,
            ..SizeBounds::default()
        };
        assert_eq!(MapSize::default_for(&bounds), MapSize::new(5_000.0, 5_000.0));
    }

    #[test]
    fn test_clamped() {
        let size = MapSize::new(10.0, 90_000.0).clamped(&SizeBounds::default());
        assert_eq!(size, MapSize::new(100.0, 35_000.0));
    }
}
