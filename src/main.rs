//! grocery-compare - Fast grocery price comparison CLI
//!
//! Compares grocery prices across Zepto, Blinkit, and BigBasket and picks the
//! best deal per product.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use grocery_compare::commands::CompareCommand;
use grocery_compare::config::{Config, OutputFormat};
use grocery_compare::market::{Vendor, VendorCatalog};
use grocery_compare::AggregationEngine;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "grocery-compare",
    version,
    about = "Fast grocery price comparison CLI",
    long_about = "Compares grocery prices across Zepto, Blinkit, and BigBasket, \
                  reporting the best deal per product and per-vendor win rates."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table", global = true, env = "GROCERY_FORMAT")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare prices for a list of products
    #[command(alias = "c")]
    Compare {
        /// Product names to compare
        products: Vec<String>,

        /// Include the configured preset products
        #[arg(long)]
        presets: bool,

        /// Write the price table as CSV to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List supported vendors
    Vendors,

    /// Show a vendor's built-in price catalog
    Catalog {
        /// Vendor to inspect
        vendor: Vendor,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.format = cli.format;

    match cli.command {
        Commands::Compare { products, presets, output } => {
            let mut all_products = products;
            if presets {
                all_products.extend(config.presets.clone());
            }

            let cmd = CompareCommand::new(config);
            let engine = AggregationEngine::with_builtin_catalogs();
            let report = cmd.run(&engine, &all_products)?;

            println!("{}", cmd.render(&report));

            if let Some(path) = output {
                std::fs::write(&path, cmd.render_csv(&report))
                    .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
                info!("Wrote CSV results to {}", path.display());
            }
        }

        Commands::Vendors => {
            println!("Supported vendors:\n");
            println!("{:<12} {:<18} {:<10}", "Code", "Domain", "Currency");
            println!("{:-<12} {:-<18} {:-<10}", "", "", "");

            for vendor in Vendor::all() {
                println!(
                    "{:<12} {:<18} {:<10}",
                    vendor.to_string(),
                    vendor.domain(),
                    vendor.currency()
                );
            }
        }

        Commands::Catalog { vendor } => {
            let catalog = VendorCatalog::builtin(vendor);

            println!("{} catalog ({} items):\n", vendor.display_name(), catalog.len());
            println!("{:<12} {:>10}", "Keyword", "Price");
            println!("{:-<12} {:-<10}", "", "");

            for entry in &catalog.entries {
                println!("{:<12} {:>10.2}", entry.keyword, entry.price);
            }
        }
    }

    Ok(())
}
