//! Pinnacle Advisor CLI
//!
//! Command-line interface for producing a single investment plan

use clap::Parser;
use pinnacle_advisor::{Assumptions, InvestmentRequest, PlanConfig, PlanEngine, RiskLevel};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pinnacle_advisor",
    version,
    about = "Suggest a portfolio split and growth projection for a monthly salary"
)]
struct Cli {
    /// Monthly salary
    #[arg(long)]
    salary: f64,

    /// Percentage of salary to invest (0-100)
    #[arg(long, default_value_t = 10.0)]
    invest_percent: f64,

    /// Risk appetite (Low, Medium, High)
    #[arg(long, default_value = "Medium")]
    risk: RiskLevel,

    /// Investment horizon in years
    #[arg(long, default_value_t = 10)]
    horizon: u32,

    /// Directory with assumption CSVs (defaults to the built-in tables)
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Print the plan as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let assumptions = match &cli.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir).map_err(|e| {
            anyhow::anyhow!("failed to load assumptions from {}: {}", dir.display(), e)
        })?,
        None => Assumptions::builtin(),
    };

    let engine = PlanEngine::new(assumptions, PlanConfig::default());
    let request = InvestmentRequest::new(cli.salary, cli.invest_percent, cli.risk, cli.horizon);
    let plan = engine.plan(&request)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("Pinnacle Advisor v0.1.0");
    println!("=======================\n");

    println!("Request:");
    println!("  Monthly Salary: ${:.2}", request.salary);
    println!("  Invest Percent: {:.1}%", request.invest_percent);
    println!("  Risk Appetite:  {}", request.risk);
    println!("  Horizon:        {} years", request.horizon_years);
    println!();

    println!("Portfolio Allocation (${:.2} invested):", plan.investment_amount);
    for line in &plan.allocation.lines {
        match engine.assumptions().links.url_for(line.asset) {
            Some(url) => println!("  {:<12} ${:>12.2}  {}", line.asset, line.amount, url),
            None => println!("  {:<12} ${:>12.2}", line.asset, line.amount),
        }
    }
    println!();

    println!(
        "Projected Returns ({:.1}% annual):",
        plan.projection.annual_rate * 100.0
    );
    println!("{:>6} {:>14}", "Year", "Value");
    println!("{}", "-".repeat(21));
    for point in &plan.projection.points {
        println!("{:>6} {:>14.2}", point.year, point.value);
    }
    println!();

    println!(
        "If you invest ${:.2} today, it could grow to ${:.2} in {} years.",
        plan.investment_amount,
        plan.final_value(),
        request.horizon_years
    );
    println!();

    if plan.emergency_fund.is_safe() {
        println!("Emergency Fund Check: your investment amount is safe compared to your emergency fund.");
    } else {
        println!(
            "Emergency Fund Check: you're investing more than {:.0} months of your salary. \
             Make sure you have an emergency fund!",
            engine.config().emergency_fund_months
        );
    }

    Ok(())
}
