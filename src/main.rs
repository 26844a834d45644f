//! Underwriting System CLI
//!
//! Command-line interface for running a full underwriting report on a
//! single property

use anyhow::{bail, Context, Result};
use chrono::Datelike;
use clap::Parser;
use std::fs::File;
use std::io::Write;
use underwriting_system::{
    Factors, MarketConditions, PropertyFinancials, UnderwritingConfig, UnderwritingRunner,
};

/// Run a full underwriting report for a single property
#[derive(Debug, Parser)]
#[command(name = "underwriting_system", version, about)]
struct Cli {
    /// Current property value
    #[arg(long, default_value_t = 350_000.0)]
    property_value: f64,

    /// Original purchase price
    #[arg(long, default_value_t = 300_000.0)]
    purchase_price: f64,

    /// Gross monthly rent
    #[arg(long, default_value_t = 2_500.0)]
    monthly_rent: f64,

    /// Monthly operating expenses
    #[arg(long, default_value_t = 1_500.0)]
    monthly_expenses: f64,

    /// Outstanding loan principal
    #[arg(long, default_value_t = 240_000.0)]
    loan_amount: f64,

    /// Current note rate as an annual fraction (0.065 = 6.5%)
    #[arg(long, default_value_t = 0.065)]
    interest_rate: f64,

    /// Remaining loan term in months
    #[arg(long, default_value_t = 360)]
    loan_term_months: u32,

    /// Cash invested at acquisition
    #[arg(long, default_value_t = 70_000.0)]
    down_payment: f64,

    /// Market regime: hot, stable or slow
    #[arg(long, default_value = "stable")]
    market: String,

    /// Calendar month (1-12) for seasonal adjustments; defaults to the
    /// current month
    #[arg(long)]
    month: Option<u32>,

    /// CSV output path for the sensitivity and stress rows
    #[arg(long, default_value = "underwriting_output.csv")]
    output: String,

    /// Print the full result as JSON instead of the report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let market = match cli.market.as_str() {
        "hot" => MarketConditions::hot(),
        "stable" => MarketConditions::stable(),
        "slow" => MarketConditions::slow(),
        other => bail!("unknown market regime: {} (expected hot, stable or slow)", other),
    };

    let property = PropertyFinancials::new(
        cli.property_value,
        cli.purchase_price,
        cli.monthly_rent,
        cli.monthly_expenses,
        cli.loan_amount,
        cli.interest_rate,
        cli.loan_term_months,
        cli.down_payment,
    );

    let config = UnderwritingConfig {
        month: cli.month.unwrap_or_else(|| chrono::Local::now().month()),
        ..UnderwritingConfig::default()
    };

    let runner = UnderwritingRunner::with_factors(Factors::for_market(market));
    let result = runner.run(&property, &config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Underwriting System v0.1.0");
    println!("==========================\n");

    println!("Property:");
    println!("  Value: ${:.2}", property.property_value);
    println!("  Purchase Price: ${:.2}", property.purchase_price);
    println!("  Monthly Rent: ${:.2}", property.monthly_rent);
    println!("  Monthly Expenses: ${:.2}", property.monthly_expenses);
    println!("  Monthly Cash Flow: ${:.2}", property.monthly_cash_flow);
    println!("  Cap Rate: {:.2}%", property.cap_rate() * 100.0);
    println!("  Cash-on-Cash: {:.2}%", property.cash_on_cash() * 100.0);
    println!();

    println!("Risk:");
    println!("  Base Score: {:.2}", result.risk.base.overall_risk_score);
    println!("  Metric Adjustment: {:+.2}", result.risk.total_adjustment);
    println!("  Adjusted Score: {:.2}", result.risk.adjusted_score);
    println!("  Probability of Loss: {:.1}%", result.risk.probability_of_loss * 100.0);
    println!("  Category: {}", result.risk.category.as_str());
    for adjustment in &result.risk.metric_adjustments {
        println!(
            "    {:>10}: {:>8.3} -> {} ({:+.2})",
            adjustment.metric, adjustment.value, adjustment.level, adjustment.adjustment
        );
    }
    println!();

    println!("Stress Test (overall score {:.1}/100):", result.stress.overall_risk_score);
    println!(
        "{:>20} {:>12} {:>12} {:>14} {:>10}",
        "Scenario", "CF Impact", "Equity", "Total", "Level"
    );
    println!("{}", "-".repeat(74));
    for scenario in &result.stress.scenarios {
        println!(
            "{:>20} {:>12.2} {:>12.2} {:>14.2} {:>10}",
            scenario.name,
            scenario.monthly_cash_flow_impact,
            scenario.equity_impact,
            scenario.total_impact,
            scenario.risk_level.as_str(),
        );
    }
    println!("  Worst Case: {}", result.stress.worst_case_scenario);
    for recommendation in &result.stress.recommendations {
        println!("  * {}", recommendation);
    }
    println!();

    println!("Exit Strategies:");
    println!(
        "{:>6} {:>14} {:>14} {:>10} {:>12}",
        "Years", "Projected", "Net Proceeds", "ROI %", "Annual %"
    );
    println!("{}", "-".repeat(62));
    for exit in &result.exit_strategies {
        println!(
            "{:>6.0} {:>14.2} {:>14.2} {:>10.2} {:>12.2}",
            exit.timeframe, exit.projected_value, exit.net_proceeds, exit.roi, exit.annualized_roi,
        );
    }
    println!();

    // Write sensitivity and stress rows to CSV
    let mut file =
        File::create(&cli.output).with_context(|| format!("unable to create {}", cli.output))?;

    writeln!(file, "Section,Name,CashFlow,Change,ChangePct,TotalImpact,RiskLevel")?;
    for row in &result.sensitivity {
        writeln!(
            file,
            "Sensitivity,{},{:.2},{:.2},{:.2},,",
            row.name, row.adjusted_cash_flow, row.cash_flow_change, row.cash_flow_change_pct,
        )?;
    }
    for scenario in &result.stress.scenarios {
        writeln!(
            file,
            "Stress,{},{:.2},{:.2},,{:.2},{}",
            scenario.name,
            scenario.stressed_cash_flow,
            scenario.monthly_cash_flow_impact,
            scenario.total_impact,
            scenario.risk_level.as_str(),
        )?;
    }

    println!("Sensitivity and stress rows written to: {}", cli.output);

    Ok(())
}
