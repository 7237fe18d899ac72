//! CLI command implementations.

use crate::output::{self, Classification, OutputFormat};
use anyhow::{Context, Result};
use console::style;
use gilded_rose_core::{stock_inventory, update_quality_with_changes, Category, Item};
use tracing::info;

/// Advance the given items (or the stock inventory) by one day.
pub fn update(raw_items: &[String], format: OutputFormat) -> Result<()> {
    let mut items = parse_items(raw_items)?;
    let changes = update_quality_with_changes(&mut items);
    info!(items = changes.len(), "Advanced inventory by one day");

    if matches!(format, OutputFormat::Human) {
        let expired = changes.iter().filter(|c| c.expired()).count();
        println!(
            "{}",
            style(format!("  Day advanced: {} items, {expired} past sell-by", changes.len()))
                .green()
                .bold()
        );
    }
    output::print_list(&changes, format)
}

/// Show the stock inventory without changing it.
pub fn inventory(format: OutputFormat) -> Result<()> {
    output::print_item_table(&stock_inventory(), format)
}

/// Show the category an item name maps to.
pub fn classify(name: &str, format: OutputFormat) -> Result<()> {
    output::print(&classify_name(name), format)
}

fn classify_name(name: &str) -> Classification {
    Classification {
        name: name.to_string(),
        category: Category::from_name(name),
    }
}

fn parse_items(raw_items: &[String]) -> Result<Vec<Item>> {
    if raw_items.is_empty() {
        return Ok(stock_inventory());
    }

    raw_items
        .iter()
        .map(|raw| {
            raw.parse::<Item>()
                .with_context(|| format!("Failed to parse item argument '{raw}'"))
        })
        .collect()
}
