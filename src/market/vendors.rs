//! Quick-commerce vendors with their storefront and currency configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported delivery platforms, in the fixed comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    #[default]
    Zepto,
    Blinkit,
    BigBasket,
}

impl Vendor {
    /// Returns the human-readable vendor name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Vendor::Zepto => "Zepto",
            Vendor::Blinkit => "Blinkit",
            Vendor::BigBasket => "BigBasket",
        }
    }

    /// Returns the storefront domain for this vendor.
    pub fn domain(&self) -> &'static str {
        match self {
            Vendor::Zepto => "zeptonow.com",
            Vendor::Blinkit => "blinkit.com",
            Vendor::BigBasket => "bigbasket.com",
        }
    }

    /// Returns the search URL for a product query on this vendor's storefront.
    pub fn search_url(&self, query: &str) -> String {
        let encoded = urlencoding::encode(query);
        match self {
            Vendor::Zepto => format!("https://www.zeptonow.com/search?query={}", encoded),
            Vendor::Blinkit => format!("https://blinkit.com/search?q={}", encoded),
            Vendor::BigBasket => format!("https://www.bigbasket.com/search/?q={}", encoded),
        }
    }

    /// Returns the currency code for this vendor.
    pub fn currency(&self) -> &'static str {
        // All three platforms operate in India only.
        "INR"
    }

    /// Returns all vendors in the fixed comparison order.
    ///
    /// This order decides ties: the first vendor with the minimum price wins.
    pub fn all() -> &'static [Vendor] {
        &[Vendor::Zepto, Vendor::Blinkit, Vendor::BigBasket]
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Vendor::Zepto => "zepto",
            Vendor::Blinkit => "blinkit",
            Vendor::BigBasket => "bigbasket",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for Vendor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zepto" => Ok(Vendor::Zepto),
            "blinkit" => Ok(Vendor::Blinkit),
            "bigbasket" => Ok(Vendor::BigBasket),
            _ => Err(format!("Unknown vendor: {}. Use: zepto, blinkit, bigbasket", s)),
        }
    }
}
