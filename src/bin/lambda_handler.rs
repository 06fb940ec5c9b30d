//! AWS Lambda handler for producing investment plans
//!
//! Accepts plan parameters via JSON and returns the full plan along with
//! the informational resource link for each allocated asset class.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use pinnacle_advisor::{
    AssetClass, Assumptions, InvestmentPlan, InvestmentRequest, PlanConfig, PlanEngine, RiskLevel,
};
use serde::{Deserialize, Serialize};

/// Input parameters for the plan
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    /// Monthly salary
    pub salary: f64,

    /// Percentage of salary to invest (default: 10)
    #[serde(default = "default_invest_percent")]
    pub invest_percent: f64,

    /// Risk appetite (default: Medium)
    #[serde(default = "default_risk")]
    pub risk: RiskLevel,

    /// Horizon in years (default: 10)
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,
}

fn default_invest_percent() -> f64 {
    10.0
}
fn default_risk() -> RiskLevel {
    RiskLevel::Medium
}
fn default_horizon_years() -> u32 {
    10
}

/// "Learn more" link for one allocated asset class
#[derive(Debug, Serialize)]
pub struct ResourceEntry {
    pub asset: AssetClass,
    pub url: String,
}

/// Response payload: the plan plus informational links
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan: InvestmentPlan,
    pub resources: Vec<ResourceEntry>,
}

async fn handler(event: LambdaEvent<PlanRequest>) -> Result<PlanResponse, Error> {
    let (request, _context) = event.into_parts();

    let engine = PlanEngine::new(Assumptions::builtin(), PlanConfig::default());
    let investment_request = InvestmentRequest::new(
        request.salary,
        request.invest_percent,
        request.risk,
        request.horizon_years,
    );

    let plan = engine.plan(&investment_request)?;

    let resources = plan
        .allocation
        .assets()
        .map(|asset| ResourceEntry {
            asset,
            url: engine
                .assumptions()
                .links
                .url_for(asset)
                .unwrap_or("")
                .to_string(),
        })
        .collect();

    Ok(PlanResponse { plan, resources })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
