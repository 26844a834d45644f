//! Basic rental tax implications

use serde::{Deserialize, Serialize};

/// Deduction toggles and amounts for the basic tax calculator
///
/// `tax_bracket` is a whole-number percent (24.0 = 24%), matching how the
/// bracket is quoted upstream; every other rate in the crate is a
/// fraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxImplications {
    pub mortgage_interest_deduction: bool,
    pub annual_mortgage_interest: f64,

    pub property_tax_deduction: bool,
    pub annual_property_tax: f64,

    pub depreciation_deduction: bool,
    pub annual_depreciation: f64,

    pub repairs_deduction: bool,
    pub annual_repairs: f64,

    pub insurance_deduction: bool,
    pub annual_insurance: f64,

    /// Marginal tax bracket, whole-number percent
    pub tax_bracket: f64,
}

/// Default toggles: everything deductible, 24% bracket, amounts zeroed
pub fn default_tax_implications() -> TaxImplications {
    TaxImplications {
        mortgage_interest_deduction: true,
        annual_mortgage_interest: 0.0,
        property_tax_deduction: true,
        annual_property_tax: 0.0,
        depreciation_deduction: true,
        annual_depreciation: 0.0,
        repairs_deduction: true,
        annual_repairs: 0.0,
        insurance_deduction: true,
        annual_insurance: 0.0,
        tax_bracket: 24.0,
    }
}

/// Result of the basic tax calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxAnalysis {
    pub total_deductions: f64,
    pub taxable_income: f64,
    pub tax_owed: f64,

    /// Bracket value of the deductions, informational
    pub tax_savings: f64,

    pub net_income: f64,

    /// Whole-number percent; NaN when annual income is zero (unguarded,
    /// caller responsibility)
    pub effective_tax_rate: f64,
}

/// Compute deductions, taxable income and net income at a flat bracket
///
/// Net income is `income - tax_owed`. The legacy calculator instead
/// added `tax_savings` back on top of that, double-counting the
/// deduction benefit; this implementation uses the consistent formula.
pub fn calculate_tax_implications(annual_income: f64, implications: &TaxImplications) -> TaxAnalysis {
    let mut total_deductions = 0.0;
    if implications.mortgage_interest_deduction {
        total_deductions += implications.annual_mortgage_interest;
    }
    if implications.property_tax_deduction {
        total_deductions += implications.annual_property_tax;
    }
    if implications.depreciation_deduction {
        total_deductions += implications.annual_depreciation;
    }
    if implications.repairs_deduction {
        total_deductions += implications.annual_repairs;
    }
    if implications.insurance_deduction {
        total_deductions += implications.annual_insurance;
    }

    let bracket = implications.tax_bracket / 100.0;
    let taxable_income = (annual_income - total_deductions).max(0.0);
    let tax_owed = taxable_income * bracket;
    let tax_savings = total_deductions * bracket;

    TaxAnalysis {
        total_deductions,
        taxable_income,
        tax_owed,
        tax_savings,
        net_income: annual_income - tax_owed,
        effective_tax_rate: tax_owed / annual_income * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn implications_with_amounts() -> TaxImplications {
        TaxImplications {
            annual_mortgage_interest: 15_000.0,
            annual_property_tax: 6_000.0,
            annual_depreciation: 8_700.0,
            annual_repairs: 2_400.0,
            annual_insurance: 1_500.0,
            ..default_tax_implications()
        }
    }

    #[test]
    fn test_all_deductions_sum() {
        let result = calculate_tax_implications(40_000.0, &implications_with_amounts());

        assert!((result.total_deductions - 33_600.0).abs() < 1e-9);
        assert!((result.taxable_income - 6_400.0).abs() < 1e-9);
        assert!((result.tax_owed - 1_536.0).abs() < 1e-9);
        assert!((result.net_income - 38_464.0).abs() < 1e-9);
    }

    #[test]
    fn test_deduction_monotonicity() {
        // Enabling more deductions must never increase taxable income
        let income = 40_000.0;
        let mut implications = implications_with_amounts();
        implications.mortgage_interest_deduction = false;
        implications.depreciation_deduction = false;

        let fewer = calculate_tax_implications(income, &implications);

        implications.mortgage_interest_deduction = true;
        let more = calculate_tax_implications(income, &implications);

        implications.depreciation_deduction = true;
        let most = calculate_tax_implications(income, &implications);

        assert!(more.taxable_income <= fewer.taxable_income);
        assert!(most.taxable_income <= more.taxable_income);
    }

    #[test]
    fn test_taxable_income_floored_at_zero() {
        let result = calculate_tax_implications(20_000.0, &implications_with_amounts());

        assert_eq!(result.taxable_income, 0.0);
        assert_eq!(result.tax_owed, 0.0);
        assert_eq!(result.net_income, 20_000.0);
    }

    #[test]
    fn test_disabled_toggles_excluded() {
        let mut implications = implications_with_amounts();
        implications.property_tax_deduction = false;

        let result = calculate_tax_implications(40_000.0, &implications);
        assert!((result.total_deductions - 27_600.0).abs() < 1e-9);
    }
}
