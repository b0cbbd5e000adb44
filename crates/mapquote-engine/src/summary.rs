//! Order summary - human-readable text of a confirmed order

use std::fmt;

use mapquote_common::OrderConfig;
use serde::Serialize;

use crate::pricing::{Quote, QuoteFingerprint, QuoteLine};

/// A confirmed order with its number and quote reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub order_number: u64,
    pub width: f64,
    pub length: f64,
    pub total_price: f64,
    pub total_days: f64,
    pub lines: Vec<QuoteLine>,
    pub fingerprint: QuoteFingerprint,
}

impl OrderSummary {
    pub fn new(
        order_number: u64,
        order: &OrderConfig,
        quote: &Quote,
        fingerprint: QuoteFingerprint,
    ) -> Self {
        Self {
            order_number,
            width: order.width,
            length: order.length,
            total_price: quote.result.total_price,
            total_days: quote.result.total_days,
            lines: quote.lines.clone(),
            fingerprint,
        }
    }

    /// Whether the totals can be quoted to a customer
    pub fn is_valid(&self) -> bool {
        self.total_price.is_finite() && self.total_days.is_finite()
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Minecraft Map Order #{} ===", self.order_number)?;
        writeln!(f, "Size: {}x{} blocks", self.width, self.length)?;
        if self.is_valid() {
            writeln!(f, "Total Price: ${}", self.total_price)?;
            writeln!(f, "Delivery Time: {} days", self.total_days)?;
        } else {
            writeln!(f, "Total Price: unavailable")?;
            writeln!(f, "Delivery Time: unavailable")?;
        }
        for line in &self.lines {
            writeln!(f, "{}: ${}", line.label, line.price)?;
        }
        write!(f, "Quote ref: {}", self.fingerprint)
    }
}
