//! grocery-compare - Fast grocery price comparison CLI
//!
//! Compares grocery prices across quick-commerce platforms and reports the
//! best deal per product along with per-vendor win statistics.

pub mod aggregate;
pub mod analysis;
pub mod commands;
pub mod config;
pub mod format;
pub mod market;

pub use aggregate::AggregationEngine;
pub use analysis::BestDealAnalyzer;
pub use config::Config;
pub use market::models::{ComparisonReport, DealSummary, PriceRow, VendorPrice, VendorWinStats};
pub use market::vendors::Vendor;
