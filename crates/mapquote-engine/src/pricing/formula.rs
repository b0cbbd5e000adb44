//! Formula breakdown - intermediate values of the base price, for display

use std::fmt;

use mapquote_common::MapSize;
use serde::{Deserialize, Serialize};

use super::base::BaseQuote;

/// Intermediate values of the base price derivation, for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormulaBreakdown {
    pub width: f64,
    pub length: f64,
    pub area: f64,
    pub area_millions: f64,
    pub derived_side: f64,
    pub raw_price: f64,
    pub adjusted_price: f64,
    pub surcharge_applied: bool,
    pub base_price: f64,
    pub recommended_days: f64,
    pub chunks_wide: f64,
    pub chunks_long: f64,
    pub total_chunks: f64,
}

impl FormulaBreakdown {
    pub fn new(size: MapSize, base: &BaseQuote) -> Self {
        let (chunks_wide, chunks_long) = size.chunks();
        Self {
            width: size.width,
            length: size.length,
            area: base.area,
            area_millions: base.area_millions,
            derived_side: base.derived_side,
            raw_price: base.raw_price,
            adjusted_price: base.adjusted_price,
            surcharge_applied: base.surcharge_applied,
            base_price: base.base_price,
            recommended_days: base.recommended_days,
            chunks_wide,
            chunks_long,
            total_chunks: chunks_wide * chunks_long,
        }
    }
}

/// Fixed-point number, or "N/A" when not finite
struct Fixed(f64, usize);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() {
            write!(f, "{:.*}", self.1, self.0)
        } else {
            f.write_str("N/A")
        }
    }
}

impl fmt::Display for FormulaBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Size:     {} x {} blocks ({} x {} = {} chunks)",
            Fixed(self.width, 0),
            Fixed(self.length, 0),
            Fixed(self.chunks_wide, 0),
            Fixed(self.chunks_long, 0),
            Fixed(self.total_chunks, 0)
        )?;
        writeln!(
            f,
            "A:        {}^2 / 10^6 = {}",
            Fixed(self.derived_side, 0),
            Fixed(self.area_millions, 3)
        )?;
        writeln!(f, "P_raw:    {}", Fixed(self.raw_price, 2))?;
        if self.surcharge_applied {
            writeln!(f, "P_large:  {} (surcharge)", Fixed(self.adjusted_price, 2))?;
        }
        writeln!(f, "P_base:   {}", Fixed(self.base_price, 0))?;
        write!(f, "T_rec:    {} days", Fixed(self.recommended_days, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::base::BasePolicy;

    fn breakdown(width: f64, length: f64) -> FormulaBreakdown {
        let base = BasePolicy::default().compute(width, length);
        FormulaBreakdown::new(MapSize::new(width, length), &base)
    }

    #[test]
    fn test_chunk_counts() {
        let formula = breakdown(1_000.0, 2_000.0);
        assert_eq!(formula.chunks_wide, 63.0);
        assert_eq!(formula.chunks_long, 125.0);
        assert_eq!(formula.total_chunks, 63.0 * 125.0);
    }

    #[test]
    fn test_display() {
        let text = breakdown(1_000.0, 1_000.0).to_string();
        assert!(text.contains("A:        1000^2 / 10^6 = 1.000"));
        assert!(text.contains("P_raw:    26.58"));
        assert!(text.contains("P_base:   30"));
        assert!(!text.contains("surcharge"));
    }

    #[test]
    fn test_display_surcharge_and_nan() {
        assert!(breakdown(20_000.0, 20_000.0).to_string().contains("(surcharge)"));
        assert!(breakdown(f64::NAN, 1_000.0).to_string().contains("N/A"));
    }
}
