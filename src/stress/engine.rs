//! Stress test execution: single combined shock and the comprehensive
//! four-scenario run

use super::scenarios::StressScenarios;
use crate::analysis::monthly_payment;
use crate::property::PropertyFinancials;
use serde::{Deserialize, Serialize};

/// Stress outcome severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    /// Fixed 0-100 mapping used for aggregation
    pub fn score(&self) -> f64 {
        match self {
            RiskLevel::Low => 25.0,
            RiskLevel::Medium => 50.0,
            RiskLevel::High => 75.0,
            RiskLevel::Critical => 100.0,
        }
    }
}

/// Combined worst-case shock for the simple stress test
///
/// All deltas are whole-number percents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressShock {
    pub rent_drop: f64,
    pub expense_increase: f64,
    pub value_drop: f64,
    pub vacancy_increase: f64,
}

impl Default for StressShock {
    fn default() -> Self {
        Self {
            rent_drop: 20.0,
            expense_increase: 25.0,
            value_drop: 15.0,
            vacancy_increase: 30.0,
        }
    }
}

/// Result of the simple combined stress test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressTestResult {
    pub stressed_monthly_rent: f64,
    pub stressed_monthly_expenses: f64,
    pub stressed_cash_flow: f64,
    pub stressed_property_value: f64,

    /// Stressed cash flow relative to baseline; non-finite when the
    /// baseline cash flow is zero (unguarded, caller responsibility)
    pub cash_flow_buffer: f64,

    /// Baseline ROI scaled by the cash flow buffer, whole-number percent
    pub stress_test_roi: f64,

    pub risk_level: RiskLevel,
}

/// Risk level from the buffer/ROI threshold table
///
/// A zero baseline cash flow makes the buffer non-finite; negative
/// infinity and NaN fail every threshold and land on Critical.
fn simple_risk_level(cash_flow_buffer: f64, stress_test_roi: f64) -> RiskLevel {
    if cash_flow_buffer >= 0.75 && stress_test_roi >= 0.0 {
        RiskLevel::Low
    } else if cash_flow_buffer >= 0.4 && stress_test_roi >= -2.0 {
        RiskLevel::Medium
    } else if cash_flow_buffer >= 0.0 {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

/// Apply a single combined worst-case shock to the baseline
///
/// Rent takes the rent drop and the vacancy increase multiplicatively;
/// expenses and value take their deltas independently.
pub fn calculate_stress_test(
    property: &PropertyFinancials,
    shock: &StressShock,
) -> StressTestResult {
    let stressed_monthly_rent = property.monthly_rent
        * (1.0 - shock.rent_drop / 100.0)
        * (1.0 - shock.vacancy_increase / 100.0);
    let stressed_monthly_expenses =
        property.monthly_expenses * (1.0 + shock.expense_increase / 100.0);
    let stressed_cash_flow = stressed_monthly_rent - stressed_monthly_expenses;
    let stressed_property_value = property.property_value * (1.0 - shock.value_drop / 100.0);

    let cash_flow_buffer = stressed_cash_flow / property.monthly_cash_flow;
    let stress_test_roi = property.annual_roi * cash_flow_buffer;

    StressTestResult {
        stressed_monthly_rent,
        stressed_monthly_expenses,
        stressed_cash_flow,
        stressed_property_value,
        cash_flow_buffer,
        stress_test_roi,
        risk_level: simple_risk_level(cash_flow_buffer, stress_test_roi),
    }
}

/// Outcome of one named scenario inside the comprehensive test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub description: String,

    /// Change in monthly cash flow while the shock persists (negative)
    pub monthly_cash_flow_impact: f64,

    /// One-time costs incurred by the scenario
    pub one_time_cost: f64,

    /// Equity lost to value decline (negative)
    pub equity_impact: f64,

    /// Total dollar impact of the scenario (negative = loss)
    pub total_impact: f64,

    pub stressed_cash_flow: f64,
    pub risk_level: RiskLevel,
}

/// Aggregated comprehensive stress test result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComprehensiveStressTestResult {
    pub scenarios: Vec<ScenarioResult>,

    /// Mean of the scenario risk scores on the fixed 25/50/75/100 map
    pub overall_risk_score: f64,

    /// Name of the scenario with the most negative total impact
    pub worst_case_scenario: String,

    pub recommendations: Vec<String>,
}

/// Scenario risk level from the stressed cash flow relative to baseline
fn scenario_risk_level(stressed_cash_flow: f64, baseline_cash_flow: f64) -> RiskLevel {
    if stressed_cash_flow >= baseline_cash_flow * 0.5 {
        RiskLevel::Low
    } else if stressed_cash_flow >= 0.0 {
        RiskLevel::Medium
    } else if stressed_cash_flow >= -baseline_cash_flow.abs() * 0.5 {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

fn recession_result(
    property: &PropertyFinancials,
    scenarios: &StressScenarios,
) -> ScenarioResult {
    let s = &scenarios.recession;

    let stressed_rent = property.monthly_rent
        * (1.0 - s.rent_decline / 100.0)
        * (1.0 - s.vacancy_increase / 100.0);
    let stressed_expenses = property.monthly_expenses * (1.0 + s.expense_increase / 100.0);
    let stressed_cash_flow = stressed_rent - stressed_expenses;

    let monthly_impact = stressed_cash_flow - property.monthly_cash_flow;
    let equity_impact = -property.property_value * s.value_decline / 100.0;
    let total_impact = monthly_impact * s.duration_months as f64 + equity_impact;

    ScenarioResult {
        name: "Recession".to_string(),
        description: s.description.clone(),
        monthly_cash_flow_impact: monthly_impact,
        one_time_cost: 0.0,
        equity_impact,
        total_impact,
        stressed_cash_flow,
        risk_level: scenario_risk_level(stressed_cash_flow, property.monthly_cash_flow),
    }
}

fn interest_rate_shock_result(
    property: &PropertyFinancials,
    scenarios: &StressScenarios,
) -> ScenarioResult {
    let s = &scenarios.interest_rate_shock;

    let current_payment = monthly_payment(
        property.loan_amount,
        property.current_interest_rate,
        property.loan_term_months,
    );
    let shocked_payment = monthly_payment(
        property.loan_amount,
        property.current_interest_rate + s.rate_increase,
        property.loan_term_months,
    );
    let payment_increase = shocked_payment - current_payment;

    let stressed_cash_flow = property.monthly_cash_flow - payment_increase;
    let monthly_impact = -payment_increase;
    // One year of the repriced debt service
    let total_impact = monthly_impact * 12.0;

    ScenarioResult {
        name: "InterestRateShock".to_string(),
        description: s.description.clone(),
        monthly_cash_flow_impact: monthly_impact,
        one_time_cost: 0.0,
        equity_impact: 0.0,
        total_impact,
        stressed_cash_flow,
        risk_level: scenario_risk_level(stressed_cash_flow, property.monthly_cash_flow),
    }
}

fn operating_shock_result(
    property: &PropertyFinancials,
    scenarios: &StressScenarios,
) -> ScenarioResult {
    let s = &scenarios.operating_shock;

    let extra_monthly_expense = property.monthly_expenses * s.expense_increase / 100.0;
    let stressed_cash_flow = property.monthly_cash_flow - extra_monthly_expense;

    let monthly_impact = -extra_monthly_expense;
    let total_impact = monthly_impact * 12.0 - s.one_time_repair_cost;

    ScenarioResult {
        name: "OperatingShock".to_string(),
        description: s.description.clone(),
        monthly_cash_flow_impact: monthly_impact,
        one_time_cost: s.one_time_repair_cost,
        equity_impact: 0.0,
        total_impact,
        stressed_cash_flow,
        risk_level: scenario_risk_level(stressed_cash_flow, property.monthly_cash_flow),
    }
}

fn market_correction_result(
    property: &PropertyFinancials,
    scenarios: &StressScenarios,
) -> ScenarioResult {
    let s = &scenarios.market_correction;

    let monthly_impact = -property.monthly_rent * s.rent_decline / 100.0;
    let stressed_cash_flow = property.monthly_cash_flow + monthly_impact;
    let equity_impact = -property.property_value * s.value_decline / 100.0;
    let total_impact = monthly_impact * 12.0 + equity_impact;

    ScenarioResult {
        name: "MarketCorrection".to_string(),
        description: s.description.clone(),
        monthly_cash_flow_impact: monthly_impact,
        one_time_cost: 0.0,
        equity_impact,
        total_impact,
        stressed_cash_flow,
        risk_level: scenario_risk_level(stressed_cash_flow, property.monthly_cash_flow),
    }
}

/// Run all four scenarios and aggregate
pub fn run_comprehensive_stress_test(
    property: &PropertyFinancials,
    scenarios: &StressScenarios,
) -> ComprehensiveStressTestResult {
    let results = vec![
        recession_result(property, scenarios),
        interest_rate_shock_result(property, scenarios),
        operating_shock_result(property, scenarios),
        market_correction_result(property, scenarios),
    ];

    let overall_risk_score =
        results.iter().map(|r| r.risk_level.score()).sum::<f64>() / results.len() as f64;

    // Worst case = most negative total dollar impact
    let worst_case_scenario = results
        .iter()
        .min_by(|a, b| a.total_impact.total_cmp(&b.total_impact))
        .map(|r| r.name.clone())
        .unwrap_or_default();

    let mut recommendations = Vec::new();

    if results.iter().any(|r| r.stressed_cash_flow < 0.0) {
        recommendations.push(
            "At least one scenario turns cash flow negative; hold a reserve covering 6 months of \
             expenses"
                .to_string(),
        );
    }

    let rate_shock = &results[1];
    if -rate_shock.monthly_cash_flow_impact > property.monthly_cash_flow * 0.25 {
        recommendations.push(
            "A 200bp rate move consumes over a quarter of the cash flow; consider locking a \
             fixed rate"
                .to_string(),
        );
    }

    let recession = &results[0];
    if -recession.equity_impact > property.equity() {
        recommendations.push(
            "A recession-scale value decline would wipe out the current equity; reduce leverage"
                .to_string(),
        );
    }

    if overall_risk_score >= 75.0 {
        recommendations.push(
            "The property fails multiple stress scenarios; re-underwrite at a lower basis"
                .to_string(),
        );
    }

    ComprehensiveStressTestResult {
        scenarios: results,
        overall_risk_score,
        worst_case_scenario,
        recommendations,
    }
}
