//! Best-deal selection and vendor win statistics.

use crate::market::{DealSummary, PriceRow, Vendor, VendorShare, VendorWinStats};

/// Picks the best deal per product and tallies vendor wins.
pub struct BestDealAnalyzer {
    vendors: Vec<Vendor>,
}

impl BestDealAnalyzer {
    /// Creates an analyzer over the given vendors, in comparison order.
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self { vendors }
    }

    /// Creates an analyzer over all built-in vendors.
    pub fn with_all_vendors() -> Self {
        Self::new(Vendor::all().to_vec())
    }

    /// Returns one `DealSummary` per row with at least one resolved price.
    ///
    /// Rows where every vendor came back unavailable produce no summary.
    pub fn best_deals(&self, rows: &[PriceRow]) -> Vec<DealSummary> {
        rows.iter()
            .filter_map(|row| {
                row.best().map(|(vendor, best_price)| DealSummary {
                    product: row.product.clone(),
                    best_price,
                    vendor,
                })
            })
            .collect()
    }

    /// Tallies per-vendor win counts and percentage shares over the deals.
    ///
    /// Every vendor gets a share entry, zero-win vendors included. With no
    /// deals at all, every percentage is 0.0.
    pub fn win_stats(&self, deals: &[DealSummary]) -> VendorWinStats {
        let total_deals = deals.len();

        let shares = self
            .vendors
            .iter()
            .map(|vendor| {
                let wins = deals.iter().filter(|d| d.vendor == *vendor).count();
                let percent = if total_deals > 0 {
                    wins as f64 / total_deals as f64 * 100.0
                } else {
                    0.0
                };
                VendorShare { vendor: *vendor, wins, percent }
            })
            .collect();

        VendorWinStats { total_deals, shares }
    }

    /// Runs both analyses over a set of rows.
    pub fn analyze(&self, rows: &[PriceRow]) -> (Vec<DealSummary>, VendorWinStats) {
        let deals = self.best_deals(rows);
        let stats = self.win_stats(&deals);
        (deals, stats)
    }
}
