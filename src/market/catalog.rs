//! Vendor price catalogs and keyword-based price resolution.

use super::models::VendorPrice;
use super::vendors::Vendor;
use serde::{Deserialize, Serialize};

/// A single catalog entry: a lowercase item keyword and its price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Canonical item keyword, lowercase
    pub keyword: String,
    /// Price in the vendor's currency, non-negative
    pub price: f64,
}

/// A vendor's price catalog.
///
/// Entries are an ordered list rather than a map: when a query contains more
/// than one keyword, the first entry in catalog order wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorCatalog {
    /// The vendor this catalog belongs to
    pub vendor: Vendor,
    /// Keyword/price entries in resolution order
    pub entries: Vec<CatalogEntry>,
}

impl VendorCatalog {
    /// Creates a catalog from `(keyword, price)` pairs.
    ///
    /// Keywords are normalized to lowercase.
    pub fn new(vendor: Vendor, entries: &[(&str, f64)]) -> Self {
        let entries = entries
            .iter()
            .map(|(keyword, price)| CatalogEntry {
                keyword: keyword.to_lowercase(),
                price: *price,
            })
            .collect();

        Self { vendor, entries }
    }

    /// Returns the built-in catalog for a vendor.
    pub fn builtin(vendor: Vendor) -> Self {
        let entries: &[(&str, f64)] = match vendor {
            Vendor::Zepto => &[
                ("milk", 65.0),
                ("bread", 25.0),
                ("eggs", 85.0),
                ("rice", 45.0),
                ("oil", 180.0),
                ("sugar", 55.0),
            ],
            Vendor::Blinkit => &[
                ("milk", 68.0),
                ("bread", 28.0),
                ("eggs", 90.0),
                ("rice", 48.0),
                ("oil", 175.0),
                ("sugar", 58.0),
            ],
            Vendor::BigBasket => &[
                ("milk", 62.0),
                ("bread", 30.0),
                ("eggs", 88.0),
                ("rice", 50.0),
                ("oil", 185.0),
                ("sugar", 52.0),
            ],
        };

        Self::new(vendor, entries)
    }

    /// Returns the built-in catalogs for all vendors, in the fixed vendor order.
    pub fn builtin_all() -> Vec<Self> {
        Vendor::all().iter().map(|v| Self::builtin(*v)).collect()
    }

    /// Resolves a product query against this catalog.
    ///
    /// Case-insensitive substring match: the first entry whose keyword occurs
    /// anywhere in the query wins. Empty and whitespace-only queries match
    /// nothing and resolve to `Unavailable`.
    pub fn resolve(&self, query: &str) -> VendorPrice {
        let query = query.to_lowercase();

        for entry in &self.entries {
            if query.contains(&entry.keyword) {
                return VendorPrice::Resolved(entry.price);
            }
        }

        VendorPrice::Unavailable
    }

    /// Returns the number of entries in this catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_keyword() {
        let catalog = VendorCatalog::builtin(Vendor::Zepto);
        assert_eq!(catalog.resolve("milk"), VendorPrice::Resolved(65.0));
        assert_eq!(catalog.resolve("bread"), VendorPrice::Resolved(25.0));
        assert_eq!(catalog.resolve("sugar"), VendorPrice::Resolved(55.0));
    }

    #[test]
    fn test_resolve_substring() {
        let catalog = VendorCatalog::builtin(Vendor::Blinkit);
        assert_eq!(catalog.resolve("Milk (1L)"), VendorPrice::Resolved(68.0));
        assert_eq!(catalog.resolve("Eggs (12 pieces)"), VendorPrice::Resolved(90.0));
        assert_eq!(catalog.resolve("Cooking Oil (1L)"), VendorPrice::Resolved(175.0));
    }

    #[test]
    fn test_resolve_case_insensitive() {
        let catalog = VendorCatalog::builtin(Vendor::BigBasket);
        assert_eq!(catalog.resolve("MILK"), VendorPrice::Resolved(62.0));
        assert_eq!(catalog.resolve("BrEaD"), VendorPrice::Resolved(30.0));
    }

    #[test]
    fn test_resolve_unknown_product() {
        let catalog = VendorCatalog::builtin(Vendor::Zepto);
        assert_eq!(catalog.resolve("avocado"), VendorPrice::Unavailable);
        assert_eq!(catalog.resolve("quinoa"), VendorPrice::Unavailable);
    }

    #[test]
    fn test_resolve_empty_query() {
        let catalog = VendorCatalog::builtin(Vendor::Zepto);
        assert_eq!(catalog.resolve(""), VendorPrice::Unavailable);
        assert_eq!(catalog.resolve("   "), VendorPrice::Unavailable);
        assert_eq!(catalog.resolve("\t\n"), VendorPrice::Unavailable);
    }

    #[test]
    fn test_resolve_first_entry_wins() {
        // A query containing two keywords resolves to the earlier entry.
        let catalog = VendorCatalog::new(Vendor::Zepto, &[("milk", 65.0), ("oil", 180.0)]);
        assert_eq!(catalog.resolve("milk and oil combo"), VendorPrice::Resolved(65.0));

        let reversed = VendorCatalog::new(Vendor::Zepto, &[("oil", 180.0), ("milk", 65.0)]);
        assert_eq!(reversed.resolve("milk and oil combo"), VendorPrice::Resolved(180.0));
    }

    #[test]
    fn test_new_normalizes_keywords() {
        let catalog = VendorCatalog::new(Vendor::Blinkit, &[("MILK", 68.0)]);
        assert_eq!(catalog.entries[0].keyword, "milk");
        assert_eq!(catalog.resolve("milk"), VendorPrice::Resolved(68.0));
    }

    #[test]
    fn test_builtin_catalogs_diverge() {
        let zepto = VendorCatalog::builtin(Vendor::Zepto);
        let blinkit = VendorCatalog::builtin(Vendor::Blinkit);
        let bigbasket = VendorCatalog::builtin(Vendor::BigBasket);

        assert_eq!(zepto.resolve("milk"), VendorPrice::Resolved(65.0));
        assert_eq!(blinkit.resolve("milk"), VendorPrice::Resolved(68.0));
        assert_eq!(bigbasket.resolve("milk"), VendorPrice::Resolved(62.0));
    }

    #[test]
    fn test_builtin_all() {
        let catalogs = VendorCatalog::builtin_all();
        assert_eq!(catalogs.len(), 3);
        assert_eq!(catalogs[0].vendor, Vendor::Zepto);
        assert_eq!(catalogs[1].vendor, Vendor::Blinkit);
        assert_eq!(catalogs[2].vendor, Vendor::BigBasket);

        for catalog in &catalogs {
            assert_eq!(catalog.len(), 6);
            assert!(!catalog.is_empty());
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = VendorCatalog::new(Vendor::Zepto, &[]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.resolve("milk"), VendorPrice::Unavailable);
    }

    #[test]
    fn test_catalog_serde() {
        let catalog = VendorCatalog::builtin(Vendor::Zepto);
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains("\"zepto\""));
        assert!(json.contains("\"milk\""));

        let parsed: VendorCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.vendor, Vendor::Zepto);
        assert_eq!(parsed.len(), 6);
    }
}
