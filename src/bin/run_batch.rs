//! Run plans for a whole batch of requests from data/sample_requests.csv
//!
//! Outputs one CSV row per request for comparison across salaries, risk
//! levels, and horizons.

use pinnacle_advisor::request::load_default_requests;
use pinnacle_advisor::{AssetClass, Assumptions, InvestmentPlan, PlanConfig, PlanEngine};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() {
    env_logger::init();

    let start = Instant::now();
    println!(
        "Pinnacle batch run started {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    println!("Loading requests from data/sample_requests.csv...");
    let requests = load_default_requests().expect("Failed to load requests");
    println!("Loaded {} requests in {:?}", requests.len(), start.elapsed());

    // Load assumptions once; each task builds its engine from a clone
    let assumptions = Assumptions::builtin();
    let config = PlanConfig::default();

    println!("Running plans...");
    let plan_start = Instant::now();

    let plans: Vec<InvestmentPlan> = requests
        .par_iter()
        .map(|request| {
            let engine = PlanEngine::new(assumptions.clone(), config.clone());
            engine.plan(request).expect("Request failed validation")
        })
        .collect();

    println!("Plans complete in {:?}", plan_start.elapsed());

    // Write output
    let output_path = "plan_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(
        file,
        "Salary,InvestPercent,Risk,HorizonYears,InvestmentAmount,Bonds,IndexFunds,Gold,Stocks,Crypto,FinalValue,EmergencyFund"
    )
    .unwrap();

    for plan in &plans {
        let amount_for = |asset: AssetClass| plan.allocation.amount_for(asset).unwrap_or(0.0);
        writeln!(
            file,
            "{:.2},{:.1},{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:?}",
            plan.request.salary,
            plan.request.invest_percent,
            plan.request.risk,
            plan.request.horizon_years,
            plan.investment_amount,
            amount_for(AssetClass::Bonds),
            amount_for(AssetClass::IndexFunds),
            amount_for(AssetClass::Gold),
            amount_for(AssetClass::Stocks),
            amount_for(AssetClass::Crypto),
            plan.final_value(),
            plan.emergency_fund,
        )
        .unwrap();
    }

    println!("Output written to {}", output_path);

    // Print summary stats
    let total_invested: f64 = plans.iter().map(|p| p.investment_amount).sum();
    let total_final: f64 = plans.iter().map(|p| p.final_value()).sum();
    let overextended = plans.iter().filter(|p| !p.emergency_fund.is_safe()).count();

    println!("\nBatch Summary:");
    println!("  Requests:        {}", plans.len());
    println!("  Total Invested:  ${:.2}", total_invested);
    println!("  Total Projected: ${:.2}", total_final);
    println!("  Overextended:    {}", overextended);

    println!("\nTotal time: {:?}", start.elapsed());
}
