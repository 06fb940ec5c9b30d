//! Reference URLs per asset class, surfaced alongside allocations
//!
//! Purely informational; never used in any computation.

use crate::request::AssetClass;
use std::collections::HashMap;
use std::error::Error;

/// "Learn more" link per asset class
#[derive(Debug, Clone)]
pub struct ResourceLinks {
    links: HashMap<AssetClass, String>,
}

impl ResourceLinks {
    /// Built-in links matching the reference advisor
    pub fn builtin() -> Self {
        let mut links = HashMap::new();
        links.insert(
            AssetClass::Bonds,
            "https://www.investopedia.com/terms/b/bond.asp".to_string(),
        );
        links.insert(
            AssetClass::IndexFunds,
            "https://www.investopedia.com/terms/i/indexfund.asp".to_string(),
        );
        links.insert(
            AssetClass::Gold,
            "https://www.investopedia.com/articles/basics/06/investgold.asp".to_string(),
        );
        links.insert(
            AssetClass::Stocks,
            "https://www.investopedia.com/terms/s/stock.asp".to_string(),
        );
        links.insert(
            AssetClass::Crypto,
            "https://www.investopedia.com/terms/c/cryptocurrency.asp".to_string(),
        );
        Self { links }
    }

    /// Create from loaded CSV data, rejecting incomplete tables
    pub fn from_loaded(links: HashMap<AssetClass, String>) -> Result<Self, Box<dyn Error>> {
        let table = Self { links };
        table.validate()?;
        Ok(table)
    }

    /// Get the reference URL for an asset class
    pub fn url_for(&self, asset: AssetClass) -> Option<&str> {
        self.links.get(&asset).map(String::as_str)
    }

    /// Check that every known asset class has a link
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        for asset in AssetClass::ALL {
            if !self.links.contains_key(&asset) {
                return Err(format!("resource links missing asset class: {}", asset).into());
            }
        }
        Ok(())
    }
}
