//! Enhanced rental tax analysis with IRS passive-loss, SALT and QBI rules
//!
//! Implements the federal rules that materially change a rental
//! investor's outcome:
//! - straight-line depreciation on the building share of basis
//!   (27.5-year residential / 39-year commercial)
//! - $10,000 SALT cap on the property tax deduction
//! - passive activity loss special allowance with AGI phase-out
//! - 20% QBI deduction capped at 20% of taxable income
//!
//! The calculator never fails; caveats are reported through `warnings`.

use crate::property::{FilingStatus, InvestmentType};
use serde::{Deserialize, Serialize};

/// SALT cap on state-and-local (property) tax deductions
pub const SALT_CAP: f64 = 10_000.0;

/// Building share of purchase price for depreciation (80/20 building/land)
pub const BUILDING_BASIS_SHARE: f64 = 0.8;

/// AGI above which the QBI deduction may be limited for rental activities
pub const QBI_AGI_WARNING_THRESHOLD: f64 = 170_050.0;

/// Inputs for the enhanced tax calculator
///
/// `tax_bracket` is a whole-number percent (24.0 = 24%);
/// `state_tax_rate` is a fraction (0.05 = 5%).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedTaxImplications {
    pub mortgage_interest_deduction: bool,
    pub annual_mortgage_interest: f64,

    pub property_tax_deduction: bool,
    pub annual_property_tax: f64,

    pub depreciation_deduction: bool,

    pub repairs_deduction: bool,
    pub annual_repairs: f64,

    pub insurance_deduction: bool,
    pub annual_insurance: f64,

    /// Marginal federal bracket, whole-number percent
    pub tax_bracket: f64,

    /// Adjusted gross income, drives the passive-loss phase-out
    pub investor_agi: f64,

    /// Materially participating investors may deduct losses in full
    pub material_participation: bool,

    /// Real estate professional status also lifts the passive limitation
    pub professional_status: bool,

    pub qbi_eligible: bool,
    pub investment_type: InvestmentType,

    /// State income tax rate (fraction)
    pub state_tax_rate: f64,

    pub filing_status: FilingStatus,

    /// Purchase price; basis for the building depreciation split
    pub purchase_price: f64,
}

/// Result of the enhanced tax calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedTaxAnalysis {
    pub building_basis: f64,
    pub annual_depreciation: f64,

    /// Property tax actually deducted after the SALT cap
    pub property_tax_deduction_used: f64,
    pub salt_cap_applied: bool,

    pub total_deductions: f64,

    /// Loss generated by the rental this year (0 when profitable)
    pub passive_loss: f64,

    /// Portion of the passive loss deductible this year
    pub allowable_passive_loss: f64,

    /// Portion carried forward to future years
    pub suspended_passive_loss: f64,

    /// Rental income after deductions and the allowed loss; negative
    /// when an allowed loss offsets other income
    pub taxable_rental_income: f64,

    pub qbi_deduction: f64,
    pub taxable_income: f64,

    /// Signed: a net allowed loss produces a negative amount, i.e. an
    /// offset against tax on other income
    pub federal_tax_owed: f64,
    pub state_tax_owed: f64,
    pub total_tax_owed: f64,

    pub net_income: f64,

    /// Whole-number percent; NaN when annual income is zero
    pub effective_tax_rate: f64,

    pub warnings: Vec<String>,
}

/// Passive-loss special allowance parameters for a filing status:
/// (base allowance, phase-out start AGI, phase-out end AGI)
fn passive_allowance_params(filing_status: FilingStatus) -> (f64, f64, f64) {
    match filing_status {
        FilingStatus::MarriedFilingSeparately => (12_500.0, 50_000.0, 75_000.0),
        _ => (25_000.0, 100_000.0, 150_000.0),
    }
}

/// Special allowance remaining at a given AGI: the base allowance reduced
/// by 50 cents per dollar of AGI over the phase-out start
fn passive_allowance_at(agi: f64, filing_status: FilingStatus) -> f64 {
    let (base, start, end) = passive_allowance_params(filing_status);
    if agi <= start {
        base
    } else if agi >= end {
        0.0
    } else {
        base - (agi - start) * 0.5
    }
}

/// Run the enhanced tax calculation for one year of rental income
pub fn calculate_enhanced_tax_implications(
    annual_income: f64,
    implications: &EnhancedTaxImplications,
) -> EnhancedTaxAnalysis {
    let mut warnings = Vec::new();

    // Depreciation on the building share of basis
    let building_basis = implications.purchase_price * BUILDING_BASIS_SHARE;
    let annual_depreciation = if implications.depreciation_deduction {
        building_basis / implications.investment_type.recovery_period_years()
    } else {
        0.0
    };

    // SALT cap on the property tax deduction
    let (property_tax_deduction_used, salt_cap_applied) = if implications.property_tax_deduction {
        if implications.annual_property_tax > SALT_CAP {
            warnings.push(format!(
                "Property tax of ${:.0} exceeds the ${:.0} SALT cap; only the capped amount is deducted",
                implications.annual_property_tax, SALT_CAP
            ));
            (SALT_CAP, true)
        } else {
            (implications.annual_property_tax, false)
        }
    } else {
        (0.0, false)
    };

    let mut total_deductions = property_tax_deduction_used + annual_depreciation;
    if implications.mortgage_interest_deduction {
        total_deductions += implications.annual_mortgage_interest;
    }
    if implications.repairs_deduction {
        total_deductions += implications.annual_repairs;
    }
    if implications.insurance_deduction {
        total_deductions += implications.annual_insurance;
    }

    // Passive activity loss limitation
    let net_rental = annual_income - total_deductions;
    let (passive_loss, allowable_passive_loss, suspended_passive_loss) = if net_rental < 0.0 {
        let loss = -net_rental;
        if implications.material_participation || implications.professional_status {
            (loss, loss, 0.0)
        } else {
            let allowance = passive_allowance_at(implications.investor_agi, implications.filing_status);
            let allowable = loss.min(allowance);
            let suspended = loss - allowable;
            if allowance == 0.0 {
                warnings.push(
                    "AGI is above the passive-loss phase-out range; the entire loss is suspended"
                        .to_string(),
                );
            } else if suspended > 0.0 {
                warnings.push(format!(
                    "${:.0} of the passive loss exceeds the special allowance and carries forward",
                    suspended
                ));
            }
            (loss, allowable, suspended)
        }
    } else {
        (0.0, 0.0, 0.0)
    };

    let taxable_rental_income = if net_rental >= 0.0 {
        net_rental
    } else {
        -allowable_passive_loss
    };

    // QBI deduction: 20% of qualified income, capped at 20% of taxable
    // income. On a rental-only return both terms coincide, but the cap is
    // kept explicit to match the statutory formula.
    let qbi_deduction = if implications.qbi_eligible && taxable_rental_income > 0.0 {
        if implications.investor_agi > QBI_AGI_WARNING_THRESHOLD {
            warnings.push(format!(
                "AGI above ${:.0}: the QBI deduction may be limited by W-2 wage and UBIA tests",
                QBI_AGI_WARNING_THRESHOLD
            ));
        }
        let qualified_component = taxable_rental_income * 0.2;
        let taxable_income_cap = taxable_rental_income * 0.2;
        qualified_component.min(taxable_income_cap)
    } else {
        0.0
    };

    let taxable_income = taxable_rental_income - qbi_deduction;

    let federal_tax_owed = taxable_income * implications.tax_bracket / 100.0;
    let state_tax_owed = taxable_income * implications.state_tax_rate;
    let total_tax_owed = federal_tax_owed + state_tax_owed;

    warnings.push(
        "Estimates only; consult a tax professional before filing".to_string(),
    );

    EnhancedTaxAnalysis {
        building_basis,
        annual_depreciation,
        property_tax_deduction_used,
        salt_cap_applied,
        total_deductions,
        passive_loss,
        allowable_passive_loss,
        suspended_passive_loss,
        taxable_rental_income,
        qbi_deduction,
        taxable_income,
        federal_tax_owed,
        state_tax_owed,
        total_tax_owed,
        net_income: annual_income - total_tax_owed,
        effective_tax_rate: total_tax_owed / annual_income * 100.0,
        warnings,
    }
}
