//! CSV-based assumption loader
//!
//! Loads allocation rules, expected returns, and resource links from CSV
//! files in data/assumptions/ so the tables can be swapped without code
//! changes.

use crate::request::{AssetClass, RiskLevel};
use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Default path to the assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// Load allocation rules from CSV
/// Returns ordered (asset, fraction) pairs per risk level; row order in the
/// file defines display order within each tier
pub fn load_allocation_rules(
    path: &Path,
) -> Result<HashMap<RiskLevel, Vec<(AssetClass, f64)>>, Box<dyn Error>> {
    let file = File::open(path.join("allocation_rules.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rules: HashMap<RiskLevel, Vec<(AssetClass, f64)>> = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let risk: RiskLevel = record[0].parse()?;
        let asset: AssetClass = record[1].parse()?;
        let fraction: f64 = record[2].parse()?;

        rules.entry(risk).or_default().push((asset, fraction));
    }

    Ok(rules)
}

/// Load expected annual return rates from CSV
/// Returns HashMap<risk, annual_rate>
pub fn load_expected_returns(path: &Path) -> Result<HashMap<RiskLevel, f64>, Box<dyn Error>> {
    let file = File::open(path.join("expected_returns.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rates = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let risk: RiskLevel = record[0].parse()?;
        let rate: f64 = record[1].parse()?;
        rates.insert(risk, rate);
    }

    Ok(rates)
}

/// Load resource links from CSV
/// Returns HashMap<asset, url>
pub fn load_resource_links(path: &Path) -> Result<HashMap<AssetClass, String>, Box<dyn Error>> {
    let file = File::open(path.join("resource_links.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut links = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let asset: AssetClass = record[0].parse()?;
        let url = record[1].to_string();
        links.insert(asset, url);
    }

    Ok(links)
}

/// Raw assumption data loaded from a directory of CSV files
pub struct LoadedAssumptions {
    pub allocation_rules: HashMap<RiskLevel, Vec<(AssetClass, f64)>>,
    pub expected_returns: HashMap<RiskLevel, f64>,
    pub resource_links: HashMap<AssetClass, String>,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            allocation_rules: load_allocation_rules(path)?,
            expected_returns: load_expected_returns(path)?,
            resource_links: load_resource_links(path)?,
        })
    }
}
