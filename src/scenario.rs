//! Scenario runner for efficient batch planning
//!
//! Pre-loads assumptions once, then allows running many plans for different
//! requests, horizons, or risk levels without re-reading CSV files.

use crate::assumptions::Assumptions;
use crate::plan::{EngineError, InvestmentPlan, PlanConfig, PlanEngine};
use crate::request::{InvestmentRequest, RiskLevel};

/// Pre-loaded scenario runner for efficient batch planning
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
///
/// // Sweep the same request across the UI's horizon choices
/// let plans = runner.run_horizons(&request, &UI_HORIZON_CHOICES)?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Pre-loaded base assumptions
    base_assumptions: Assumptions,

    /// Configuration applied to every run
    config: PlanConfig,
}

impl ScenarioRunner {
    /// Create runner with the built-in in-memory assumptions
    pub fn new() -> Self {
        Self {
            base_assumptions: Assumptions::builtin(),
            config: PlanConfig::default(),
        }
    }

    /// Create runner by loading assumptions from CSV files
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            base_assumptions: Assumptions::from_csv()?,
            config: PlanConfig::default(),
        })
    }

    /// Create runner from a specific assumptions directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            base_assumptions: Assumptions::from_csv_path(path)?,
            config: PlanConfig::default(),
        })
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            base_assumptions: assumptions,
            config: PlanConfig::default(),
        }
    }

    /// Run a single plan for the given request
    pub fn run(&self, request: &InvestmentRequest) -> Result<InvestmentPlan, EngineError> {
        let engine = PlanEngine::new(self.base_assumptions.clone(), self.config.clone());
        engine.plan(request)
    }

    /// Run plans for multiple requests with the same assumptions
    pub fn run_batch(
        &self,
        requests: &[InvestmentRequest],
    ) -> Result<Vec<InvestmentPlan>, EngineError> {
        let engine = PlanEngine::new(self.base_assumptions.clone(), self.config.clone());
        requests.iter().map(|request| engine.plan(request)).collect()
    }

    /// Sweep one request across several horizons
    pub fn run_horizons(
        &self,
        base: &InvestmentRequest,
        horizons: &[u32],
    ) -> Result<Vec<InvestmentPlan>, EngineError> {
        let engine = PlanEngine::new(self.base_assumptions.clone(), self.config.clone());
        horizons
            .iter()
            .map(|&horizon_years| {
                let request = InvestmentRequest {
                    horizon_years,
                    ..base.clone()
                };
                engine.plan(&request)
            })
            .collect()
    }

    /// Run one request at every risk level, for side-by-side comparison
    pub fn run_risk_ladder(
        &self,
        base: &InvestmentRequest,
    ) -> Result<Vec<InvestmentPlan>, EngineError> {
        let engine = PlanEngine::new(self.base_assumptions.clone(), self.config.clone());
        RiskLevel::ALL
            .iter()
            .map(|&risk| {
                let request = InvestmentRequest { risk, ..base.clone() };
                engine.plan(&request)
            })
            .collect()
    }

    /// Get reference to base assumptions for inspection/modification
    pub fn assumptions(&self) -> &Assumptions {
        &self.base_assumptions
    }

    /// Get mutable reference to base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.base_assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::UI_HORIZON_CHOICES;

    fn test_request() -> InvestmentRequest {
        InvestmentRequest::new(50_000.0, 10.0, RiskLevel::Medium, 5)
    }

    #[test]
    fn test_run_horizons() {
        let runner = ScenarioRunner::new();
        let plans = runner.run_horizons(&test_request(), &UI_HORIZON_CHOICES).unwrap();

        assert_eq!(plans.len(), 4);
        for (plan, horizon) in plans.iter().zip(UI_HORIZON_CHOICES) {
            assert_eq!(plan.projection.horizon_years(), horizon);
        }

        // Longer horizon compounds to a higher final value
        assert!(plans[3].final_value() > plans[0].final_value());
    }

    #[test]
    fn test_run_risk_ladder() {
        let runner = ScenarioRunner::new();
        let plans = runner.run_risk_ladder(&test_request()).unwrap();

        assert_eq!(plans.len(), 3);

        // Higher assumed return should result in a higher final value
        assert!(plans[2].final_value() > plans[1].final_value());
        assert!(plans[1].final_value() > plans[0].final_value());
    }

    #[test]
    fn test_run_batch_propagates_invalid_request() {
        let runner = ScenarioRunner::new();
        let requests = vec![
            test_request(),
            InvestmentRequest::new(-5.0, 10.0, RiskLevel::Low, 1),
        ];
        assert!(runner.run_batch(&requests).is_err());
    }
}
