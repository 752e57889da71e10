//! Compare command implementation.

use crate::aggregate::{dedup_preserving_order, AggregationEngine};
use crate::analysis::BestDealAnalyzer;
use crate::config::Config;
use crate::format::Formatter;
use crate::market::ComparisonReport;
use anyhow::Result;
use tracing::{debug, info};

/// Executes a price comparison run.
pub struct CompareCommand {
    config: Config,
}

impl CompareCommand {
    /// Creates a new compare command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the comparison against the built-in catalogs and returns
    /// formatted output.
    pub fn execute(&self, products: &[String]) -> Result<String> {
        let engine = AggregationEngine::with_builtin_catalogs();
        let report = self.run(&engine, products)?;
        Ok(self.render(&report))
    }

    /// Runs the comparison with a provided engine (for testing and custom
    /// catalogs) and returns the raw report.
    pub fn run(&self, engine: &AggregationEngine, products: &[String]) -> Result<ComparisonReport> {
        let unique = dedup_preserving_order(products);
        if unique.len() < products.len() {
            debug!("Removed {} duplicate product names", products.len() - unique.len());
        }

        let rows = engine.run_with_progress(&unique, |done, total, name| {
            debug!("Searched prices for {} ({}/{})", name, done, total);
        });

        if rows.is_empty() {
            anyhow::bail!("No products to compare. Enter at least one non-empty product name.");
        }

        let analyzer = BestDealAnalyzer::new(engine.vendors());
        let (deals, stats) = analyzer.analyze(&rows);

        info!("Compared {} products, {} with at least one price", rows.len(), deals.len());

        Ok(ComparisonReport { rows, deals, stats })
    }

    /// Renders a report in the configured output format.
    pub fn render(&self, report: &ComparisonReport) -> String {
        Formatter::new(self.config.format, &self.config.currency).format_report(report)
    }

    /// Renders the price rows of a report as CSV, for file export.
    pub fn render_csv(&self, report: &ComparisonReport) -> String {
        Formatter::new(self.config.format, &self.config.currency).csv_rows(&report.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::market::{Vendor, VendorCatalog};

    fn products(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn make_config(format: OutputFormat) -> Config {
        Config { format, ..Config::default() }
    }

    #[test]
    fn test_execute_basic() {
        let cmd = CompareCommand::new(make_config(OutputFormat::Table));
        let output = cmd.execute(&products(&["Milk (1L)", "Bread"])).unwrap();

        assert!(output.contains("Milk (1L)"));
        assert!(output.contains("Bread"));
        assert!(output.contains("Best Deals"));
        assert!(output.contains("Vendor Performance"));
    }

    #[test]
    fn test_execute_empty_input_is_error() {
        let cmd = CompareCommand::new(make_config(OutputFormat::Table));

        let result = cmd.execute(&[]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No products to compare"));

        let result = cmd.execute(&products(&["", "   "]));
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_dedups_input() {
        let cmd = CompareCommand::new(make_config(OutputFormat::Table));
        let engine = AggregationEngine::with_builtin_catalogs();

        let report = cmd.run(&engine, &products(&["Milk", "milk", "Bread"])).unwrap();
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].product, "Milk");
        assert_eq!(report.rows[1].product, "Bread");
    }

    #[test]
    fn test_run_with_custom_catalogs() {
        let cmd = CompareCommand::new(make_config(OutputFormat::Table));
        let engine = AggregationEngine::new(vec![
            VendorCatalog::new(Vendor::Zepto, &[("milk", 65.0)]),
            VendorCatalog::new(Vendor::Blinkit, &[("milk", 68.0)]),
        ]);

        let report = cmd.run(&engine, &products(&["Milk (1L)"])).unwrap();
        assert_eq!(report.deals.len(), 1);
        assert_eq!(report.deals[0].vendor, Vendor::Zepto);
        assert_eq!(report.stats.share_for(Vendor::Zepto).unwrap().percent, 100.0);
    }

    #[test]
    fn test_execute_json_format() {
        let cmd = CompareCommand::new(make_config(OutputFormat::Json));
        let output = cmd.execute(&products(&["Milk"])).unwrap();

        assert!(output.starts_with('{'));
        let parsed: ComparisonReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.rows.len(), 1);
    }

    #[test]
    fn test_render_csv_regardless_of_format() {
        let cmd = CompareCommand::new(make_config(OutputFormat::Table));
        let engine = AggregationEngine::with_builtin_catalogs();

        let report = cmd.run(&engine, &products(&["Bread"])).unwrap();
        let csv = cmd.render_csv(&report);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "product,zepto,blinkit,bigbasket");
        assert_eq!(lines[1], "Bread,25,28,30");
    }

    #[test]
    fn test_unknown_products_still_produce_rows() {
        let cmd = CompareCommand::new(make_config(OutputFormat::Table));
        let engine = AggregationEngine::with_builtin_catalogs();

        let report = cmd.run(&engine, &products(&["Dragonfruit"])).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert!(report.deals.is_empty());
        assert_eq!(report.stats.total_deals, 0);
    }
}
