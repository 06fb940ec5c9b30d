//! Planning engine: allocation, projection, and the emergency-fund check

mod engine;
mod error;
mod result;

pub use engine::{PlanConfig, PlanEngine};
pub use error::EngineError;
pub use result::{
    AllocationLine, EmergencyFundStatus, InvestmentPlan, PortfolioAllocation, ProjectionPoint,
    ProjectionSeries,
};
