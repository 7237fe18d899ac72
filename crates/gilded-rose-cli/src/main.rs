//! gilded-rose CLI - advance the inn's inventory by one day.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "gilded-rose")]
#[command(author, version, about = "Gilded Rose inventory update CLI")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    format: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Advance items by one day and show what changed
    Update {
        /// Items as "name,sell_in,quality" (defaults to the stock inventory)
        items: Vec<String>,
    },

    /// Show the stock inventory
    #[command(alias = "ls")]
    Inventory,

    /// Show which rules apply to an item name
    Classify {
        /// Exact item name
        name: String,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so json/yaml output stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Update { items } => commands::update(&items, cli.format),
        Commands::Inventory => commands::inventory(cli.format),
        Commands::Classify { name } => commands::classify(&name, cli.format),
    }
}
