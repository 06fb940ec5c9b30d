//! Plan output structures
//!
//! All outputs are derived values, never mutated after creation.

use crate::request::{AssetClass, InvestmentRequest, RiskLevel};
use serde::{Deserialize, Serialize};

/// One allocated slice of the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationLine {
    pub asset: AssetClass,
    pub amount: f64,
}

/// Portfolio split for a single invested amount
///
/// Lines keep the allocation table's declared order and cover exactly the
/// asset classes of the request's risk tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAllocation {
    pub risk: RiskLevel,
    pub lines: Vec<AllocationLine>,
}

impl PortfolioAllocation {
    /// Total invested amount (sum of all lines)
    pub fn invested(&self) -> f64 {
        self.lines.iter().map(|line| line.amount).sum()
    }

    /// Allocated amount for one asset class, if present in this tier
    pub fn amount_for(&self, asset: AssetClass) -> Option<f64> {
        self.lines
            .iter()
            .find(|line| line.asset == asset)
            .map(|line| line.amount)
    }

    /// Asset classes covered by this allocation, in display order
    pub fn assets(&self) -> impl Iterator<Item = AssetClass> + '_ {
        self.lines.iter().map(|line| line.asset)
    }
}

/// Projected value at the end of one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Year index, 1-based
    pub year: u32,
    pub value: f64,
}

/// Year-by-year compound growth projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    /// Annual rate the series was compounded at
    pub annual_rate: f64,

    /// One point per year, from year 1 through the horizon
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    /// Number of projected years
    pub fn horizon_years(&self) -> u32 {
        self.points.len() as u32
    }

    /// Projected value at the end of the horizon (0 for an empty series)
    pub fn final_value(&self) -> f64 {
        self.points.last().map(|point| point.value).unwrap_or(0.0)
    }

    /// Projected value at the end of a specific year, if within the horizon
    pub fn value_at(&self, year: u32) -> Option<f64> {
        self.points
            .iter()
            .find(|point| point.year == year)
            .map(|point| point.value)
    }
}

/// Emergency-fund safety flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmergencyFundStatus {
    /// Investment amount is within the emergency-fund threshold
    Safe,
    /// Investment amount exceeds the emergency-fund threshold
    Overextended,
}

impl EmergencyFundStatus {
    pub fn is_safe(&self) -> bool {
        matches!(self, EmergencyFundStatus::Safe)
    }
}

/// Complete advisory plan for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPlan {
    /// The validated request this plan was derived from
    pub request: InvestmentRequest,

    /// Principal derived from salary and invest percent
    pub investment_amount: f64,

    pub allocation: PortfolioAllocation,
    pub projection: ProjectionSeries,
    pub emergency_fund: EmergencyFundStatus,
}

impl InvestmentPlan {
    /// Projected value at the end of the horizon
    pub fn final_value(&self) -> f64 {
        self.projection.final_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_accessors() {
        let allocation = PortfolioAllocation {
            risk: RiskLevel::Low,
            lines: vec![
                AllocationLine { asset: AssetClass::Bonds, amount: 70.0 },
                AllocationLine { asset: AssetClass::IndexFunds, amount: 20.0 },
                AllocationLine { asset: AssetClass::Gold, amount: 10.0 },
            ],
        };

        assert_eq!(allocation.invested(), 100.0);
        assert_eq!(allocation.amount_for(AssetClass::Bonds), Some(70.0));
        assert_eq!(allocation.amount_for(AssetClass::Crypto), None);
        assert_eq!(allocation.assets().count(), 3);
    }

    #[test]
    fn test_projection_accessors() {
        let series = ProjectionSeries {
            annual_rate: 0.05,
            points: vec![
                ProjectionPoint { year: 1, value: 105.0 },
                ProjectionPoint { year: 2, value: 110.25 },
            ],
        };

        assert_eq!(series.horizon_years(), 2);
        assert_eq!(series.final_value(), 110.25);
        assert_eq!(series.value_at(1), Some(105.0));
        assert_eq!(series.value_at(3), None);
    }
}
