//! Expected annual return rates by risk appetite

use crate::request::RiskLevel;
use std::collections::HashMap;
use std::error::Error;

/// Assumed annual growth rate per risk level
///
/// Illustrative constants, not calibrated market forecasts.
#[derive(Debug, Clone)]
pub struct ReturnTable {
    rates: HashMap<RiskLevel, f64>,
}

impl ReturnTable {
    /// Built-in rates matching the reference advisor
    pub fn builtin() -> Self {
        let mut rates = HashMap::new();
        rates.insert(RiskLevel::Low, 0.05);
        rates.insert(RiskLevel::Medium, 0.08);
        rates.insert(RiskLevel::High, 0.12);
        Self { rates }
    }

    /// Create from loaded CSV data, rejecting malformed tables
    pub fn from_loaded(rates: HashMap<RiskLevel, f64>) -> Result<Self, Box<dyn Error>> {
        let table = Self { rates };
        table.validate()?;
        Ok(table)
    }

    /// Get the assumed annual rate for a risk level
    pub fn annual_rate(&self, risk: RiskLevel) -> f64 {
        self.rates.get(&risk).copied().unwrap_or(0.0)
    }

    /// Check table invariants: every risk tier present with a finite rate
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        for risk in RiskLevel::ALL {
            let rate = self
                .rates
                .get(&risk)
                .ok_or_else(|| format!("return table missing risk tier: {}", risk))?;
            if !rate.is_finite() || *rate <= -1.0 {
                return Err(format!("invalid annual rate {} for {}", rate, risk).into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rates() {
        let table = ReturnTable::builtin();
        assert_eq!(table.annual_rate(RiskLevel::Low), 0.05);
        assert_eq!(table.annual_rate(RiskLevel::Medium), 0.08);
        assert_eq!(table.annual_rate(RiskLevel::High), 0.12);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_from_loaded_rejects_missing_tier() {
        let mut rates = HashMap::new();
        rates.insert(RiskLevel::Low, 0.05);
        rates.insert(RiskLevel::Medium, 0.08);
        assert!(ReturnTable::from_loaded(rates).is_err());
    }

    #[test]
    fn test_from_loaded_rejects_non_finite_rate() {
        let mut rates = HashMap::new();
        rates.insert(RiskLevel::Low, 0.05);
        rates.insert(RiskLevel::Medium, f64::NAN);
        rates.insert(RiskLevel::High, 0.12);
        assert!(ReturnTable::from_loaded(rates).is_err());
    }
}
