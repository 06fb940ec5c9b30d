//! Core planning engine: allocation, projection, and the emergency-fund check

use crate::assumptions::Assumptions;
use crate::request::{InvestmentRequest, RiskLevel};
use super::error::EngineError;
use super::result::{
    AllocationLine, EmergencyFundStatus, InvestmentPlan, PortfolioAllocation, ProjectionPoint,
    ProjectionSeries,
};

/// Configuration for a planning run
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Months of salary that should stay liquid as an emergency fund
    pub emergency_fund_months: f64,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            emergency_fund_months: 3.0,
        }
    }
}

/// Main planning engine
///
/// Stateless per call: every operation is a pure function of its inputs and
/// the immutable assumption tables, so no synchronization is needed.
#[derive(Debug, Clone)]
pub struct PlanEngine {
    assumptions: Assumptions,
    config: PlanConfig,
}

impl PlanEngine {
    /// Create a new engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: PlanConfig) -> Self {
        Self { assumptions, config }
    }

    /// Create an engine with the built-in tables and default config
    pub fn builtin() -> Self {
        Self::new(Assumptions::builtin(), PlanConfig::default())
    }

    /// Split an amount across the risk tier's asset classes.
    ///
    /// Negative, NaN, or infinite amounts are rejected rather than clamped.
    /// A zero amount yields the tier's full set of lines, all zero.
    pub fn allocate(
        &self,
        risk: RiskLevel,
        amount: f64,
    ) -> Result<PortfolioAllocation, EngineError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(EngineError::invalid(format!(
                "allocation amount must be a non-negative finite number, got {}",
                amount
            )));
        }

        let lines = self
            .assumptions
            .allocation
            .mix_for(risk)
            .iter()
            .map(|&(asset, fraction)| AllocationLine {
                asset,
                amount: amount * fraction,
            })
            .collect();

        Ok(PortfolioAllocation { risk, lines })
    }

    /// Compound a lump-sum principal annually over the horizon.
    ///
    /// value[y] = principal * (1 + rate)^y for y in 1..=horizon_years.
    /// No intermediate contributions.
    pub fn project(
        &self,
        principal: f64,
        risk: RiskLevel,
        horizon_years: u32,
    ) -> Result<ProjectionSeries, EngineError> {
        if !principal.is_finite() || principal < 0.0 {
            return Err(EngineError::invalid(format!(
                "projection principal must be a non-negative finite number, got {}",
                principal
            )));
        }
        if horizon_years < 1 {
            return Err(EngineError::invalid("projection horizon must be at least 1 year"));
        }

        let annual_rate = self.assumptions.returns.annual_rate(risk);
        let points: Vec<ProjectionPoint> = (1..=horizon_years)
            .map(|year| ProjectionPoint {
                year,
                value: principal * (1.0 + annual_rate).powi(year as i32),
            })
            .collect();

        // Never hand back silent infinities; the series is non-decreasing
        // for non-negative rates, so the last point is the one to check
        if let Some(last) = points.last() {
            if !last.value.is_finite() {
                return Err(EngineError::invalid(format!(
                    "projection overflows for principal {} over {} years",
                    principal, horizon_years
                )));
            }
        }

        Ok(ProjectionSeries { annual_rate, points })
    }

    /// Compare the investment amount against the emergency-fund threshold
    /// (salary times the configured number of months).
    ///
    /// Total over all real inputs; the boundary itself is Safe.
    pub fn check_emergency_fund(&self, salary: f64, investment_amount: f64) -> EmergencyFundStatus {
        let threshold = salary * self.config.emergency_fund_months;
        if investment_amount > threshold {
            EmergencyFundStatus::Overextended
        } else {
            EmergencyFundStatus::Safe
        }
    }

    /// Validate a request and produce the complete plan for it
    pub fn plan(&self, request: &InvestmentRequest) -> Result<InvestmentPlan, EngineError> {
        request.validate()?;

        let investment_amount = request.investment_amount();
        log::debug!(
            "planning {} risk, {:.2} principal over {} years",
            request.risk,
            investment_amount,
            request.horizon_years
        );

        let allocation = self.allocate(request.risk, investment_amount)?;
        let projection = self.project(investment_amount, request.risk, request.horizon_years)?;
        let emergency_fund = self.check_emergency_fund(request.salary, investment_amount);

        Ok(InvestmentPlan {
            request: request.clone(),
            investment_amount,
            allocation,
            projection,
            emergency_fund,
        })
    }

    /// Get reference to the engine's assumption tables
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Get reference to the engine's configuration
    pub fn config(&self) -> &PlanConfig {
        &self.config
    }
}
