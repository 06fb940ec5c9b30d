//! Advisory assumptions: allocation rules, return rates, and resource links

mod allocation;
mod resources;
mod returns;
pub mod loader;

pub use allocation::AllocationTable;
pub use loader::LoadedAssumptions;
pub use resources::ResourceLinks;
pub use returns::ReturnTable;

use std::error::Error;
use std::path::Path;

/// Container for all advisory assumptions
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub allocation: AllocationTable,
    pub returns: ReturnTable,
    pub links: ResourceLinks,
}

impl Assumptions {
    /// Create assumptions with the built-in tables matching the reference advisor
    pub fn builtin() -> Self {
        Self {
            allocation: AllocationTable::builtin(),
            returns: ReturnTable::builtin(),
            links: ResourceLinks::builtin(),
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self, Box<dyn Error>> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    ///
    /// Tables are validated before use: every risk tier must be present with
    /// fractions summing to 1.0, and every asset class must carry a link.
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let loaded = LoadedAssumptions::load_from(path)?;

        Ok(Self {
            allocation: AllocationTable::from_loaded(loaded.allocation_rules)?,
            returns: ReturnTable::from_loaded(loaded.expected_returns)?,
            links: ResourceLinks::from_loaded(loaded.resource_links)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RiskLevel;

    #[test]
    fn test_csv_matches_builtin() {
        let builtin = Assumptions::builtin();
        let loaded = Assumptions::from_csv().expect("Failed to load assumption CSVs");

        for risk in RiskLevel::ALL {
            assert_eq!(
                loaded.allocation.mix_for(risk),
                builtin.allocation.mix_for(risk),
                "allocation mix mismatch for {}",
                risk
            );
            assert_eq!(
                loaded.returns.annual_rate(risk),
                builtin.returns.annual_rate(risk)
            );
        }
    }
}
