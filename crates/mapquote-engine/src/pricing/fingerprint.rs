//! Quote fingerprint
//!
//! A stable reference for an order configuration. Two equal configurations
//! always produce the same fingerprint, so a quote can be reproduced from its
//! reference alone.

use std::fmt;

use mapquote_common::{OrderConfig, Result};
use serde::{Serialize, Serializer};

/// Hex digits shown in the short form
const SHORT_LEN: usize = 12;

/// blake3 digest of an order configuration's JSON encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuoteFingerprint(blake3::Hash);

impl QuoteFingerprint {
    pub fn of(order: &OrderConfig) -> Result<Self> {
        let bytes = serde_json::to_vec(order)?;
        Ok(Self(blake3::hash(&bytes)))
    }

    /// Full 64-digit hex digest
    pub fn to_hex(&self) -> String {
        self.0.to_hex().to_string()
    }

    /// Abbreviated hex digest for human-facing text
    pub fn short(&self) -> String {
        self.to_hex()[..SHORT_LEN].to_string()
    }
}

impl fmt::Display for QuoteFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short())
    }
}

impl Serialize for QuoteFingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
