//! Fixed-ratio portfolio allocation rules by risk appetite

use crate::request::{AssetClass, RiskLevel};
use std::collections::HashMap;
use std::error::Error;

/// Tolerance when checking that a tier's fractions sum to 1.0
const FRACTION_SUM_TOLERANCE: f64 = 1e-9;

/// Allocation mix per risk level: ordered (asset, fraction) pairs
///
/// Fractions within a tier sum to 1.0. The table is immutable after
/// construction; rows keep their declared order so rendering is stable.
#[derive(Debug, Clone)]
pub struct AllocationTable {
    rules: HashMap<RiskLevel, Vec<(AssetClass, f64)>>,
}

impl AllocationTable {
    /// Built-in mix matching the reference advisor
    pub fn builtin() -> Self {
        let mut rules = HashMap::new();
        rules.insert(
            RiskLevel::Low,
            vec![
                (AssetClass::Bonds, 0.70),
                (AssetClass::IndexFunds, 0.20),
                (AssetClass::Gold, 0.10),
            ],
        );
        rules.insert(
            RiskLevel::Medium,
            vec![
                (AssetClass::IndexFunds, 0.50),
                (AssetClass::Bonds, 0.30),
                (AssetClass::Stocks, 0.20),
            ],
        );
        rules.insert(
            RiskLevel::High,
            vec![
                (AssetClass::Stocks, 0.70),
                (AssetClass::IndexFunds, 0.20),
                (AssetClass::Crypto, 0.10),
            ],
        );
        Self { rules }
    }

    /// Create from loaded CSV data, rejecting malformed tables
    pub fn from_loaded(
        rules: HashMap<RiskLevel, Vec<(AssetClass, f64)>>,
    ) -> Result<Self, Box<dyn Error>> {
        let table = Self { rules };
        table.validate()?;
        Ok(table)
    }

    /// Get the ordered (asset, fraction) mix for a risk level
    pub fn mix_for(&self, risk: RiskLevel) -> &[(AssetClass, f64)] {
        self.rules.get(&risk).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check table invariants: every risk tier present, no duplicate
    /// assets, non-negative fractions summing to 1.0
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        for risk in RiskLevel::ALL {
            let mix = self
                .rules
                .get(&risk)
                .ok_or_else(|| format!("allocation table missing risk tier: {}", risk))?;
            if mix.is_empty() {
                return Err(format!("allocation table has empty mix for {}", risk).into());
            }

            let mut seen = Vec::with_capacity(mix.len());
            let mut sum = 0.0;
            for &(asset, fraction) in mix {
                if seen.contains(&asset) {
                    return Err(format!("duplicate asset {} in {} tier", asset, risk).into());
                }
                seen.push(asset);

                if !fraction.is_finite() || fraction < 0.0 {
                    return Err(
                        format!("invalid fraction {} for {} in {} tier", fraction, asset, risk)
                            .into(),
                    );
                }
                sum += fraction;
            }

            if (sum - 1.0).abs() > FRACTION_SUM_TOLERANCE {
                return Err(format!("fractions for {} tier sum to {}, expected 1.0", risk, sum).into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let table = AllocationTable::builtin();
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_builtin_mixes() {
        let table = AllocationTable::builtin();

        let low = table.mix_for(RiskLevel::Low);
        assert_eq!(low.len(), 3);
        assert_eq!(low[0], (AssetClass::Bonds, 0.70));
        assert_eq!(low[1], (AssetClass::IndexFunds, 0.20));
        assert_eq!(low[2], (AssetClass::Gold, 0.10));

        let medium = table.mix_for(RiskLevel::Medium);
        assert_eq!(medium[0], (AssetClass::IndexFunds, 0.50));
        assert_eq!(medium[1], (AssetClass::Bonds, 0.30));
        assert_eq!(medium[2], (AssetClass::Stocks, 0.20));

        let high = table.mix_for(RiskLevel::High);
        assert_eq!(high[0], (AssetClass::Stocks, 0.70));
        assert_eq!(high[1], (AssetClass::IndexFunds, 0.20));
        assert_eq!(high[2], (AssetClass::Crypto, 0.10));
    }

    #[test]
    fn test_from_loaded_rejects_bad_sum() {
        let mut rules = HashMap::new();
        for risk in RiskLevel::ALL {
            rules.insert(risk, vec![(AssetClass::Bonds, 0.5), (AssetClass::Gold, 0.4)]);
        }
        assert!(AllocationTable::from_loaded(rules).is_err());
    }

    #[test]
    fn test_from_loaded_rejects_missing_tier() {
        let mut rules = HashMap::new();
        rules.insert(RiskLevel::Low, vec![(AssetClass::Bonds, 1.0)]);
        assert!(AllocationTable::from_loaded(rules).is_err());
    }

    #[test]
    fn test_from_loaded_rejects_duplicate_asset() {
        let mut rules = HashMap::new();
        for risk in RiskLevel::ALL {
            rules.insert(
                risk,
                vec![(AssetClass::Bonds, 0.5), (AssetClass::Bonds, 0.5)],
            );
        }
        assert!(AllocationTable::from_loaded(rules).is_err());
    }
}
