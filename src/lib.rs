//! Pinnacle Advisor - investment planning engine
//!
//! This library provides:
//! - Fixed-ratio portfolio allocation by risk appetite
//! - Compound annual growth projections over a chosen horizon
//! - An emergency-fund safety check
//! - Batch scenario running over CSV request files
//! - CSV-swappable assumption tables with built-in defaults

pub mod app;
pub mod assumptions;
pub mod plan;
pub mod request;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{AllocationTable, Assumptions, ResourceLinks, ReturnTable};
pub use plan::{EngineError, InvestmentPlan, PlanConfig, PlanEngine};
pub use request::{AssetClass, InvestmentRequest, RiskLevel};
pub use scenario::ScenarioRunner;
