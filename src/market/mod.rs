//! Market domain: vendors, price catalogs, and comparison data models.

pub mod catalog;
pub mod models;
pub mod vendors;

pub use catalog::{CatalogEntry, VendorCatalog};
pub use models::{
    ComparisonReport, DealSummary, PriceRow, VendorPrice, VendorQuote, VendorShare, VendorWinStats,
};
pub use vendors::Vendor;
