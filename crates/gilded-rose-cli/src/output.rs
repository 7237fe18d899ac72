//! Output formatting for the CLI.

use anyhow::{Context, Result};
use gilded_rose_core::{Category, Item, ItemChange};
use serde::Serialize;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// Print output in the specified format.
pub fn print<T: Serialize + HumanDisplay>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => println!("{}", value.human_display()),
        OutputFormat::Json => println!("{}", to_json(value)?),
        OutputFormat::Yaml => println!("{}", to_yaml(value)?),
    }
    Ok(())
}

/// Print a list in the specified format.
pub fn print_list<T: Serialize + HumanDisplay>(values: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for value in values {
                println!("{}", value.human_display());
            }
        }
        OutputFormat::Json => println!("{}", to_json(&values)?),
        OutputFormat::Yaml => println!("{}", to_yaml(&values)?),
    }
    Ok(())
}

/// Print items as a table with dynamic column widths.
pub fn print_item_table(items: &[Item], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if items.is_empty() {
                println!("No items in stock.");
            } else {
                print!("{}", item_table(items));
            }
        }
        OutputFormat::Json => println!("{}", to_json(&items)?),
        OutputFormat::Yaml => println!("{}", to_yaml(&items)?),
    }
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize to JSON")
}

fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_yaml::to_string(value).context("Failed to serialize to YAML")
}

fn item_table(items: &[Item]) -> String {
    let name_width = items
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let category_width = "backstage-pass".len();

    let mut out = format!(
        "{:<name_w$}  {:<cat_w$}  {:>7}  {:>7}\n",
        "NAME",
        "CATEGORY",
        "SELL_IN",
        "QUALITY",
        name_w = name_width,
        cat_w = category_width
    );
    out.push_str(&"-".repeat(name_width + category_width + 22));
    out.push('\n');

    for item in items {
        out.push_str(&format!(
            "{:<name_w$}  {:<cat_w$}  {:>7}  {:>7}\n",
            item.name,
            item.category().to_string(),
            item.sell_in,
            item.quality,
            name_w = name_width,
            cat_w = category_width
        ));
    }
    out
}

/// Trait for human-readable display.
pub trait HumanDisplay {
    fn human_display(&self) -> String;
}

impl HumanDisplay for ItemChange {
    fn human_display(&self) -> String {
        format!(
            "{:<42} sell_in {:>3} → {:<3}  quality {:>3} → {:<3} ({:+})",
            self.name,
            self.sell_in.0,
            self.sell_in.1,
            self.quality.0,
            self.quality.1,
            self.quality_delta()
        )
    }
}

/// Name-to-category lookup result.
#[derive(Debug, Serialize)]
pub struct Classification {
    pub name: String,
    pub category: Category,
}

impl HumanDisplay for Classification {
    fn human_display(&self) -> String {
        format!("{:?} → {}", self.name, self.category)
    }
}
