//! Refinance scenario analysis

use crate::property::PropertyFinancials;
use serde::{Deserialize, Serialize};

/// Parameters for a refinance scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinanceScenario {
    /// Years from now when the refinance happens
    pub timing: f64,

    /// New note rate (annual fraction)
    pub new_rate: f64,

    /// New loan term in years
    pub new_term: u32,

    /// Closing costs of the refinance
    pub refinance_costs: f64,

    /// Equity taken out as cash at closing
    pub cash_out_amount: f64,
}

/// Standard monthly payment for a fully amortizing loan
///
/// `M = P * r / (1 - (1+r)^-n)` with monthly rate `r`. A zero rate
/// degenerates to straight principal division.
pub fn monthly_payment(principal: f64, annual_rate: f64, term_months: u32) -> f64 {
    if term_months == 0 {
        return principal;
    }
    let r = annual_rate / 12.0;
    if r == 0.0 {
        return principal / term_months as f64;
    }
    principal * r / (1.0 - (1.0 + r).powi(-(term_months as i32)))
}

/// Approximate loan balance outstanding after `years` have elapsed
///
/// Compounds the principal at the current note rate and nets the nominal
/// payments made, rather than walking a true amortization schedule. This
/// understates principal paydown (the estimated balance runs high); kept
/// for parity with the legacy calculator.
pub fn remaining_balance_at(
    principal: f64,
    annual_rate: f64,
    term_months: u32,
    years: f64,
) -> f64 {
    let months = years * 12.0;
    let r = annual_rate / 12.0;
    let payment = monthly_payment(principal, annual_rate, term_months);
    principal * (1.0 + r).powf(months) - payment * months
}

/// Outcome of one refinance scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinanceAnalysis {
    pub timing: f64,
    pub remaining_balance: f64,
    pub new_loan_amount: f64,
    pub current_monthly_payment: f64,
    pub new_monthly_payment: f64,

    /// Current payment minus new payment; negative when the refinance
    /// raises the payment
    pub monthly_savings: f64,

    /// Months of savings needed to recover closing costs. When savings
    /// are zero or negative this is infinite or negative respectively;
    /// downstream consumers decide how to present that
    pub break_even_months: f64,

    pub cash_out_amount: f64,
}

/// Evaluate a single refinance scenario against the current loan
pub fn analyze_refinance_scenario(
    property: &PropertyFinancials,
    scenario: &RefinanceScenario,
) -> RefinanceAnalysis {
    let remaining_balance = remaining_balance_at(
        property.loan_amount,
        property.current_interest_rate,
        property.loan_term_months,
        scenario.timing,
    );

    let new_loan_amount = remaining_balance + scenario.cash_out_amount;

    let current_monthly_payment = monthly_payment(
        property.loan_amount,
        property.current_interest_rate,
        property.loan_term_months,
    );
    let new_monthly_payment =
        monthly_payment(new_loan_amount, scenario.new_rate, scenario.new_term * 12);

    let monthly_savings = current_monthly_payment - new_monthly_payment;
    let break_even_months = scenario.refinance_costs / monthly_savings;

    RefinanceAnalysis {
        timing: scenario.timing,
        remaining_balance,
        new_loan_amount,
        current_monthly_payment,
        new_monthly_payment,
        monthly_savings,
        break_even_months,
        cash_out_amount: scenario.cash_out_amount,
    }
}

/// Evaluate every scenario independently
pub fn analyze_refinance_scenarios(
    property: &PropertyFinancials,
    scenarios: &[RefinanceScenario],
) -> Vec<RefinanceAnalysis> {
    scenarios
        .iter()
        .map(|s| analyze_refinance_scenario(property, s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_property() -> PropertyFinancials {
        PropertyFinancials::new(
            350_000.0,
            300_000.0,
            2_500.0,
            1_500.0,
            240_000.0,
            0.065,
            360,
            70_000.0,
        )
    }

    #[test]
    fn test_monthly_payment_formula() {
        // $240k, 6.5%, 30yr -> $1516.96
        let payment = monthly_payment(240_000.0, 0.065, 360);
        assert_relative_eq!(payment, 1_516.96, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_payment() {
        let payment = monthly_payment(120_000.0, 0.0, 120);
        assert_eq!(payment, 1_000.0);
    }

    #[test]
    fn test_lower_rate_saves_money() {
        let property = test_property();
        let scenario = RefinanceScenario {
            timing: 0.0,
            new_rate: 0.05,
            new_term: 30,
            refinance_costs: 6_000.0,
            cash_out_amount: 0.0,
        };

        let result = analyze_refinance_scenario(&property, &scenario);

        assert!(result.monthly_savings > 0.0);
        assert!(result.break_even_months > 0.0);
        assert!(result.break_even_months.is_finite());
    }

    #[test]
    fn test_higher_rate_negative_break_even() {
        let property = test_property();
        let scenario = RefinanceScenario {
            timing: 0.0,
            new_rate: 0.09,
            new_term: 30,
            refinance_costs: 6_000.0,
            cash_out_amount: 0.0,
        };

        let result = analyze_refinance_scenario(&property, &scenario);

        assert!(result.monthly_savings < 0.0);
        assert!(result.break_even_months < 0.0);
    }

    #[test]
    fn test_cash_out_increases_new_loan() {
        let property = test_property();
        let base = RefinanceScenario {
            timing: 2.0,
            new_rate: 0.055,
            new_term: 30,
            refinance_costs: 5_000.0,
            cash_out_amount: 0.0,
        };
        let cash_out = RefinanceScenario {
            cash_out_amount: 40_000.0,
            ..base.clone()
        };

        let r_base = analyze_refinance_scenario(&property, &base);
        let r_cash = analyze_refinance_scenario(&property, &cash_out);

        assert_relative_eq!(
            r_cash.new_loan_amount,
            r_base.new_loan_amount + 40_000.0,
            epsilon = 1e-9
        );
        assert!(r_cash.new_monthly_payment > r_base.new_monthly_payment);
    }

    #[test]
    fn test_balance_approximation_runs_high() {
        // The compound-growth approximation must not show more paydown
        // than a true amortization schedule would
        let principal = 240_000.0;
        let rate = 0.065;
        let approx_balance = remaining_balance_at(principal, rate, 360, 5.0);

        // True remaining balance after 60 payments of a 30yr 6.5% loan
        let r = rate / 12.0;
        let payment = monthly_payment(principal, rate, 360);
        let true_balance =
            principal * (1.0_f64 + r).powi(60) - payment * ((1.0_f64 + r).powi(60) - 1.0) / r;

        assert!(approx_balance > true_balance);
    }
}
