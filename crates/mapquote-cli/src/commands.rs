//! Subcommand handlers

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use mapquote_common::{FeatureEdit, FeaturePath, MapQuoteError, OrderConfig};
use mapquote_engine::{PricingEngine, Quote, QuoteSession, SessionEdit};
use tracing::{debug, info};

use crate::cli::{FeatureAssignment, QuoteArgs};
use crate::config::AppConfig;

/// Quote an order built from the arguments and print it
pub fn quote(config: &AppConfig, args: &QuoteArgs, out: &mut impl Write) -> Result<()> {
    let mut session = QuoteSession::new(
        PricingEngine::new(config.engine.clone()),
        config.catalog()?,
        config.size.clone(),
    );

    if let Some(path) = &args.order {
        session.restore(read_order(path)?);
        info!(path = %path.display(), "Restored saved order");
    }

    for edit in session_edits(args)? {
        session.apply(edit)?;
    }

    if args.summary {
        let summary = session.confirm()?;
        if args.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        } else {
            writeln!(out, "{summary}")?;
        }
        return Ok(());
    }

    let quote = session.quote();
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&quote)?)?;
    } else {
        write_quote(out, &quote)?;
        if args.explain {
            writeln!(out)?;
            writeln!(out, "{}", quote.formula)?;
        }
    }
    Ok(())
}

/// Print the orderable features
pub fn catalog(config: &AppConfig, json: bool, out: &mut impl Write) -> Result<()> {
    let catalog = config.catalog()?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(catalog.entries())?)?;
        return Ok(());
    }

    for entry in catalog.entries() {
        writeln!(
            out,
            "{:<28} {:<24} ${:<6} {} days/unit",
            entry.path, entry.name, entry.price_per_unit, entry.days_per_unit
        )?;
        if !entry.description.is_empty() {
            writeln!(out, "    {}", entry.description)?;
        }
    }
    Ok(())
}

fn read_order(path: &Path) -> Result<OrderConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read order file {}", path.display()))?;
    let order = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse order file {}", path.display()))?;
    Ok(order)
}

/// Translate flags into session edits, sizes first
fn session_edits(args: &QuoteArgs) -> Result<Vec<SessionEdit>, MapQuoteError> {
    let mut edits = Vec::new();

    if let Some(width) = &args.width {
        edits.push(SessionEdit::WidthText(width.clone()));
    }
    if let Some(length) = &args.length {
        edits.push(SessionEdit::LengthText(length.clone()));
    }

    for raw in &args.features {
        let assignment = FeatureAssignment::parse(raw)?;
        edits.push(SessionEdit::Feature {
            path: assignment.path.clone(),
            edit: FeatureEdit::Enabled(true),
        });
        if let Some(quantity) = assignment.quantity {
            edits.push(SessionEdit::Feature { path: assignment.path, edit: quantity });
        }
    }

    let custom = [
        args.custom_name.as_ref().map(|name| FeatureEdit::Name(name.clone())),
        args.custom_price.as_deref().map(FeatureEdit::price_text),
        args.custom_days.as_deref().map(FeatureEdit::days_text),
    ];
    for edit in custom.into_iter().flatten() {
        edits.push(SessionEdit::Feature { path: FeaturePath::custom(), edit });
    }

    if let Some(days) = args.delivery_days {
        edits.push(SessionEdit::DeliveryDays(Some(days)));
    }

    debug!(count = edits.len(), "Collected session edits");
    Ok(edits)
}

fn amount(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        "unavailable".to_string()
    }
}

fn write_quote(out: &mut impl Write, quote: &Quote) -> std::io::Result<()> {
    let result = &quote.result;
    let formula = &quote.formula;

    writeln!(out, "Size:             {} x {} blocks", formula.width, formula.length)?;
    writeln!(out, "Base price:       ${}", amount(result.base_price))?;
    writeln!(out, "Recommended time: {} days", amount(result.recommended_days))?;
    for line in &quote.lines {
        writeln!(
            out,
            "  {} x{}: +${}, +{} days",
            line.label, line.quantity, line.price, line.days
        )?;
    }
    if quote.delivery_adjustment != 0.0 {
        writeln!(out, "Delivery adjust:  ${}", quote.delivery_adjustment)?;
    }
    writeln!(out, "Total price:      ${}", amount(result.total_price))?;
    writeln!(out, "Delivery time:    {} days", amount(result.total_days))
}
