//! Price aggregation: runs every vendor catalog over a list of products.

use crate::market::{PriceRow, Vendor, VendorCatalog, VendorQuote};
use tracing::trace;

/// Removes duplicate product names, keeping the first occurrence.
///
/// Names that differ only in case are duplicates; the first spelling wins.
pub fn dedup_preserving_order(products: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(products.len());
    let mut unique: Vec<String> = Vec::with_capacity(products.len());

    for product in products {
        let key = product.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            unique.push(product.clone());
        }
    }

    unique
}

/// Aggregates prices across vendor catalogs.
///
/// The engine owns its catalogs; callers construct one explicitly and pass it
/// into each run. Runs are pure: identical inputs and catalogs always produce
/// identical rows.
pub struct AggregationEngine {
    catalogs: Vec<VendorCatalog>,
}

impl AggregationEngine {
    /// Creates an engine over the given catalogs.
    ///
    /// Catalog order is the vendor comparison order and decides price ties.
    pub fn new(catalogs: Vec<VendorCatalog>) -> Self {
        Self { catalogs }
    }

    /// Creates an engine over the built-in vendor catalogs.
    pub fn with_builtin_catalogs() -> Self {
        Self::new(VendorCatalog::builtin_all())
    }

    /// Returns the vendors covered by this engine, in comparison order.
    pub fn vendors(&self) -> Vec<Vendor> {
        self.catalogs.iter().map(|c| c.vendor).collect()
    }

    /// Produces one `PriceRow` per non-blank product, in input order.
    ///
    /// Blank (empty or whitespace-only) entries are skipped. The input is
    /// expected to be deduplicated already; see [`dedup_preserving_order`].
    pub fn run(&self, products: &[String]) -> Vec<PriceRow> {
        self.run_with_progress(products, |_, _, _| {})
    }

    /// Like [`run`](Self::run), with a progress observer.
    ///
    /// The observer is invoked once per completed product with
    /// `(completed, total, product_name)`, where `total` counts the non-blank
    /// entries. It is cosmetic only and has no effect on the result.
    pub fn run_with_progress<F>(&self, products: &[String], mut on_product: F) -> Vec<PriceRow>
    where
        F: FnMut(usize, usize, &str),
    {
        let total = products.iter().filter(|p| !p.trim().is_empty()).count();
        let mut rows = Vec::with_capacity(total);

        for product in products {
            if product.trim().is_empty() {
                continue;
            }

            let quotes: Vec<VendorQuote> = self
                .catalogs
                .iter()
                .map(|catalog| {
                    let price = catalog.resolve(product);
                    trace!(vendor = %catalog.vendor, %product, ?price, "resolved");
                    VendorQuote { vendor: catalog.vendor, price }
                })
                .collect();

            rows.push(PriceRow { product: product.clone(), quotes });
            on_product(rows.len(), total, product);
        }

        rows
    }
}
