//! Request data structures for the advisory engine

use crate::plan::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Horizon choices offered by the reference UI selector.
/// The engine itself accepts any positive number of years.
pub const UI_HORIZON_CHOICES: [u32; 4] = [1, 3, 5, 10];

/// Risk appetite selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// All risk levels, in ascending order of assumed return
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RiskLevel::Low),
            "Medium" => Ok(RiskLevel::Medium),
            "High" => Ok(RiskLevel::High),
            other => Err(EngineError::invalid(format!(
                "unknown risk level: {} (expected Low, Medium, or High)",
                other
            ))),
        }
    }
}

/// Asset classes the allocation tables can reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    Bonds,
    IndexFunds,
    Gold,
    Stocks,
    Crypto,
}

impl AssetClass {
    /// All asset classes known to the resource-link table
    pub const ALL: [AssetClass; 5] = [
        AssetClass::Bonds,
        AssetClass::IndexFunds,
        AssetClass::Gold,
        AssetClass::Stocks,
        AssetClass::Crypto,
    ];

    /// Human-readable name matching the reference UI labels
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Bonds => "Bonds",
            AssetClass::IndexFunds => "Index Funds",
            AssetClass::Gold => "Gold",
            AssetClass::Stocks => "Stocks",
            AssetClass::Crypto => "Crypto",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AssetClass {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bonds" => Ok(AssetClass::Bonds),
            "Index Funds" => Ok(AssetClass::IndexFunds),
            "Gold" => Ok(AssetClass::Gold),
            "Stocks" => Ok(AssetClass::Stocks),
            "Crypto" => Ok(AssetClass::Crypto),
            other => Err(EngineError::invalid(format!("unknown asset class: {}", other))),
        }
    }
}

/// A single advisory request, constructed fresh per user interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRequest {
    /// Monthly salary, non-negative
    pub salary: f64,

    /// Percentage of salary to invest, in [0, 100]
    pub invest_percent: f64,

    /// Risk appetite
    pub risk: RiskLevel,

    /// Projection horizon in whole years, at least 1
    pub horizon_years: u32,
}

impl InvestmentRequest {
    pub fn new(salary: f64, invest_percent: f64, risk: RiskLevel, horizon_years: u32) -> Self {
        Self {
            salary,
            invest_percent,
            risk,
            horizon_years,
        }
    }

    /// The principal to be allocated and projected: salary * (invest_percent / 100)
    pub fn investment_amount(&self) -> f64 {
        self.salary * (self.invest_percent / 100.0)
    }

    /// Validate field domains before any computation runs.
    ///
    /// The engine rejects out-of-domain values rather than clamping them,
    /// since it may be called outside a constrained input widget.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(EngineError::invalid(format!(
                "salary must be a non-negative finite number, got {}",
                self.salary
            )));
        }
        if !self.invest_percent.is_finite()
            || self.invest_percent < 0.0
            || self.invest_percent > 100.0
        {
            return Err(EngineError::invalid(format!(
                "invest_percent must be within [0, 100], got {}",
                self.invest_percent
            )));
        }
        if self.horizon_years < 1 {
            return Err(EngineError::invalid("horizon_years must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_investment_amount() {
        let request = InvestmentRequest::new(50_000.0, 10.0, RiskLevel::Medium, 5);
        assert!((request.investment_amount() - 5_000.0).abs() < 1e-9);

        let nothing = InvestmentRequest::new(50_000.0, 0.0, RiskLevel::Low, 1);
        assert_eq!(nothing.investment_amount(), 0.0);
    }

    #[test]
    fn test_validate_rejects_out_of_domain() {
        let ok = InvestmentRequest::new(1_000.0, 50.0, RiskLevel::High, 10);
        assert!(ok.validate().is_ok());

        let negative_salary = InvestmentRequest::new(-1.0, 10.0, RiskLevel::Low, 1);
        assert!(negative_salary.validate().is_err());

        let nan_salary = InvestmentRequest::new(f64::NAN, 10.0, RiskLevel::Low, 1);
        assert!(nan_salary.validate().is_err());

        let percent_too_high = InvestmentRequest::new(1_000.0, 100.5, RiskLevel::Low, 1);
        assert!(percent_too_high.validate().is_err());

        let zero_horizon = InvestmentRequest::new(1_000.0, 10.0, RiskLevel::Low, 0);
        assert!(zero_horizon.validate().is_err());
    }

    #[test]
    fn test_risk_level_parsing() {
        assert_eq!("Low".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
        assert_eq!("Medium".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
        assert_eq!("High".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert!("Aggressive".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_asset_class_labels_round_trip() {
        for asset in AssetClass::ALL {
            assert_eq!(asset.as_str().parse::<AssetClass>().unwrap(), asset);
        }
    }
}
