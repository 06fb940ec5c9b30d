//! Advisory request data structures and batch loading

mod data;
pub mod loader;

pub use data::{AssetClass, InvestmentRequest, RiskLevel, UI_HORIZON_CHOICES};
pub use loader::{load_default_requests, load_requests, load_requests_from_reader};
