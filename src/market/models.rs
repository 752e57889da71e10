//! Data models for price rows, best deals, and vendor win statistics.

use super::vendors::Vendor;
use serde::{Deserialize, Serialize};

/// Outcome of a single vendor lookup.
///
/// Unresolved prices are data, not errors: "vendor has no matching item" and
/// any other failure collapse to `Unavailable`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "amount", rename_all = "lowercase")]
pub enum VendorPrice {
    /// A resolved, finite, non-negative price
    Resolved(f64),
    /// No price could be resolved for this product
    Unavailable,
}

impl VendorPrice {
    /// Returns the resolved price, if any.
    pub fn amount(&self) -> Option<f64> {
        match self {
            VendorPrice::Resolved(price) => Some(*price),
            VendorPrice::Unavailable => None,
        }
    }

    /// Returns true if a price was resolved.
    pub fn is_resolved(&self) -> bool {
        matches!(self, VendorPrice::Resolved(_))
    }
}

/// One vendor's price for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VendorQuote {
    /// The vendor that was queried
    pub vendor: Vendor,
    /// The lookup outcome
    pub price: VendorPrice,
}

/// Per-product comparison row: one quote per vendor, in fixed vendor order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    /// Product name as entered
    pub product: String,
    /// One quote per vendor, in comparison order
    pub quotes: Vec<VendorQuote>,
}

impl PriceRow {
    /// Returns the resolved price for a vendor, if any.
    pub fn price_for(&self, vendor: Vendor) -> Option<f64> {
        self.quotes.iter().find(|q| q.vendor == vendor).and_then(|q| q.price.amount())
    }

    /// Returns true if at least one vendor resolved a price.
    pub fn has_any_price(&self) -> bool {
        self.quotes.iter().any(|q| q.price.is_resolved())
    }

    /// Returns the minimum resolved price and its vendor.
    ///
    /// Ties break toward the earlier quote, so the fixed vendor order decides.
    pub fn best(&self) -> Option<(Vendor, f64)> {
        let mut best: Option<(Vendor, f64)> = None;

        for quote in &self.quotes {
            if let Some(price) = quote.price.amount() {
                match best {
                    Some((_, current)) if price >= current => {}
                    _ => best = Some((quote.vendor, price)),
                }
            }
        }

        best
    }
}

/// Best deal for a single product: the minimum price and its vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealSummary {
    /// Product name as entered
    pub product: String,
    /// Minimum resolved price across vendors
    pub best_price: f64,
    /// Vendor offering the minimum price
    pub vendor: Vendor,
}

/// One vendor's share of best deals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorShare {
    /// The vendor
    pub vendor: Vendor,
    /// Number of products where this vendor had the best price
    pub wins: usize,
    /// Share of all best deals, 0.0-100.0
    pub percent: f64,
}

/// Per-vendor win counts across a comparison run.
///
/// Every vendor appears, including those with zero wins. The win counts sum
/// to `total_deals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorWinStats {
    /// Total number of best deals (rows with at least one resolved price)
    pub total_deals: usize,
    /// One share entry per vendor, in fixed vendor order
    pub shares: Vec<VendorShare>,
}

impl VendorWinStats {
    /// Returns the share entry for a vendor, if present.
    pub fn share_for(&self, vendor: Vendor) -> Option<&VendorShare> {
        self.shares.iter().find(|s| s.vendor == vendor)
    }
}

/// Full output of one comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// One row per product, in input order
    pub rows: Vec<PriceRow>,
    /// Best deal per product with at least one resolved price
    pub deals: Vec<DealSummary>,
    /// Vendor win statistics over the deals
    pub stats: VendorWinStats,
}
