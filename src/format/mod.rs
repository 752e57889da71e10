//! Output formatting for comparison reports (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::market::{ComparisonReport, PriceRow, Vendor};

/// Formats comparison reports for output.
pub struct Formatter {
    format: OutputFormat,
    currency: String,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat, currency: impl Into<String>) -> Self {
        Self { format, currency: currency.into() }
    }

    /// Formats a full comparison report.
    pub fn format_report(&self, report: &ComparisonReport) -> String {
        if report.rows.is_empty() {
            return match self.format {
                OutputFormat::Json => self.json_report(report),
                OutputFormat::Csv => self.csv_header(&[]),
                _ => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_report(report),
            OutputFormat::Table => self.table_report(report),
            OutputFormat::Markdown => self.markdown_report(report),
            OutputFormat::Csv => self.csv_rows(&report.rows),
        }
    }

    /// Formats the price rows as CSV, regardless of the configured format.
    ///
    /// Header row of column names, one row per product, plain numeric prices,
    /// literal "N/A" where a vendor had no price.
    pub fn csv_rows(&self, rows: &[PriceRow]) -> String {
        let vendors = row_vendors(rows);
        let mut lines = Vec::new();
        lines.push(self.csv_header(&vendors));

        for row in rows {
            let mut fields = vec![Self::csv_escape(&row.product)];
            for vendor in &vendors {
                let field = match row.price_for(*vendor) {
                    Some(price) => price.to_string(),
                    None => "N/A".to_string(),
                };
                fields.push(field);
            }
            lines.push(fields.join(","));
        }

        lines.join("\n")
    }

    // JSON formatting

    fn json_report(&self, report: &ComparisonReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    // Table formatting

    fn table_report(&self, report: &ComparisonReport) -> String {
        let vendors = row_vendors(&report.rows);
        let product_width = 24;
        let price_width = 14;

        let mut lines = Vec::new();

        // Price table
        let mut header = format!("{:<product_width$}", "Product");
        for vendor in &vendors {
            let column = format!("{} ({})", vendor.display_name(), self.currency);
            header.push_str(&format!("  {:<price_width$}", column));
        }
        lines.push(header);

        let mut separator = format!("{:-<product_width$}", "");
        for _ in &vendors {
            separator.push_str(&format!("  {:-<price_width$}", ""));
        }
        lines.push(separator);

        for row in &report.rows {
            let mut line = format!("{:<product_width$}", truncate(&row.product, product_width));
            for vendor in &vendors {
                let price_str = match row.price_for(*vendor) {
                    Some(price) => format!("{:.2}", price),
                    None => "N/A".to_string(),
                };
                line.push_str(&format!("  {:>price_width$}", price_str));
            }
            lines.push(line);
        }

        // Best deals
        if !report.deals.is_empty() {
            lines.push(String::new());
            lines.push("Best Deals".to_string());
            lines.push(format!(
                "{:<product_width$}  {:>12}  {:<10}",
                "Product", "Best Price", "Vendor"
            ));
            lines.push(format!("{:-<product_width$}  {:-<12}  {:-<10}", "", "", ""));

            for deal in &report.deals {
                lines.push(format!(
                    "{:<product_width$}  {:>12}  {:<10}",
                    truncate(&deal.product, product_width),
                    format!("{}{:.2}", self.currency, deal.best_price),
                    deal.vendor.display_name()
                ));
            }
        }

        // Vendor performance
        lines.push(String::new());
        lines.push("Vendor Performance".to_string());
        for share in &report.stats.shares {
            lines.push(format!(
                "{}: {} best deals ({:.1}%)",
                share.vendor.display_name(),
                share.wins,
                share.percent
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", report.rows.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_report(&self, report: &ComparisonReport) -> String {
        let vendors = row_vendors(&report.rows);
        let mut lines = Vec::new();

        let mut header = "| Product |".to_string();
        let mut separator = "|---------|".to_string();
        for vendor in &vendors {
            header.push_str(&format!(" {} ({}) |", vendor.display_name(), self.currency));
            separator.push_str("-------|");
        }
        lines.push(header);
        lines.push(separator);

        for row in &report.rows {
            let mut line = format!("| {} |", row.product);
            for vendor in &vendors {
                let price_str = match row.price_for(*vendor) {
                    Some(price) => format!("{:.2}", price),
                    None => "N/A".to_string(),
                };
                line.push_str(&format!(" {} |", price_str));
            }
            lines.push(line);
        }

        if !report.deals.is_empty() {
            lines.push(String::new());
            lines.push("**Best Deals**".to_string());
            lines.push(String::new());
            lines.push("| Product | Best Price | Vendor |".to_string());
            lines.push("|---------|------------|--------|".to_string());
            for deal in &report.deals {
                lines.push(format!(
                    "| {} | {}{:.2} | {} |",
                    deal.product,
                    self.currency,
                    deal.best_price,
                    deal.vendor.display_name()
                ));
            }
        }

        lines.push(String::new());
        for share in &report.stats.shares {
            lines.push(format!(
                "- **{}**: {} best deals ({:.1}%)",
                share.vendor.display_name(),
                share.wins,
                share.percent
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products compared*", report.rows.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self, vendors: &[Vendor]) -> String {
        let vendors = if vendors.is_empty() { Vendor::all() } else { vendors };
        let mut columns = vec!["product".to_string()];
        columns.extend(vendors.iter().map(|v| v.to_string()));
        columns.join(",")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

/// Returns the vendor columns for a set of rows, in quote order.
fn row_vendors(rows: &[PriceRow]) -> Vec<Vendor> {
    match rows.first() {
        Some(row) => row.quotes.iter().map(|q| q.vendor).collect(),
        None => Vendor::all().to_vec(),
    }
}

/// Truncates a string for fixed-width table columns.
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let cut: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}
