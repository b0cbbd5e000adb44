//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mapquote_common::{FeatureEdit, FeaturePath, InputError, MapQuoteError};

#[derive(Debug, Parser)]
#[command(name = "mapquote", version, about = "Price and delivery quotes for custom map orders")]
pub struct Cli {
    /// Configuration file (defaults to ./mapquote.{toml,json,yaml} if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Quote an order
    Quote(QuoteArgs),
    /// List orderable features
    Catalog {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Start from a saved order (JSON)
    #[arg(long, value_name = "FILE")]
    pub order: Option<PathBuf>,

    /// Map width in blocks; invalid values fall back to the minimum
    #[arg(long, allow_hyphen_values = true)]
    pub width: Option<String>,

    /// Map length in blocks; invalid values fall back to the minimum
    #[arg(long, allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Enable a feature, e.g. `structures.villages=3` or `custom_caves`
    #[arg(long = "feature", value_name = "PATH[=QTY]")]
    pub features: Vec<String>,

    /// Name of the custom feature
    #[arg(long, value_name = "NAME")]
    pub custom_name: Option<String>,

    /// Unit price of the custom feature
    #[arg(long, value_name = "PRICE")]
    pub custom_price: Option<String>,

    /// Unit days of the custom feature
    #[arg(long, value_name = "DAYS")]
    pub custom_days: Option<String>,

    /// Requested delivery time (adjustable delivery policy only)
    #[arg(long, value_name = "DAYS")]
    pub delivery_days: Option<f64>,

    /// Show the base price derivation
    #[arg(long)]
    pub explain: bool,

    /// Confirm the order and print its summary
    #[arg(long)]
    pub summary: bool,

    /// Print the quote as JSON
    #[arg(long)]
    pub json: bool,
}

/// `path` or `path=quantity` from a `--feature` flag
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureAssignment {
    pub path: FeaturePath,
    pub quantity: Option<FeatureEdit>,
}

impl FeatureAssignment {
    pub fn parse(raw: &str) -> Result<Self, MapQuoteError> {
        let (path, quantity) = match raw.split_once('=') {
            Some((path, quantity)) if !quantity.trim().is_empty() => {
                (path, Some(FeatureEdit::quantity_text(quantity)))
            }
            Some(_) => return Err(InputError::MalformedAssignment(raw.to_string()).into()),
            None => (raw, None),
        };

        Ok(Self {
            path: path.parse()?,
            quantity,
        })
    }
}
