//! Core data types for MapQuote

pub mod feature;
pub mod map_size;
pub mod order;
pub mod pricing;
