//! Property snapshot structures used as calculator inputs

use serde::{Deserialize, Serialize};

/// Investment property type, drives depreciation schedule selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentType {
    /// Residential rental (27.5-year straight-line depreciation)
    Residential,
    /// Commercial property (39-year straight-line depreciation)
    Commercial,
}

impl InvestmentType {
    /// Depreciation recovery period in years for the IRS straight-line schedule
    pub fn recovery_period_years(&self) -> f64 {
        match self {
            InvestmentType::Residential => 27.5,
            InvestmentType::Commercial => 39.0,
        }
    }
}

/// Federal filing status of the investor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
    MarriedFilingSeparately,
    HeadOfHousehold,
}

impl FilingStatus {
    /// Get the string representation used in portfolio CSV files
    pub fn as_str(&self) -> &'static str {
        match self {
            FilingStatus::Single => "Single",
            FilingStatus::MarriedFilingJointly => "MFJ",
            FilingStatus::MarriedFilingSeparately => "MFS",
            FilingStatus::HeadOfHousehold => "HoH",
        }
    }
}

/// Baseline financial snapshot of a single property
///
/// This is the input every calculator works from. All rates are annual
/// fractions (0.065 = 6.5%) except `annual_roi`, which is a whole-number
/// percent (3.4 = 3.4%) matching how the figure is quoted upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyFinancials {
    /// Current property value used for equity and stress calculations
    pub property_value: f64,

    /// Original purchase price (basis for gain and depreciation)
    pub purchase_price: f64,

    /// Current market value used for exit strategy projections
    pub current_market_value: f64,

    /// Gross scheduled monthly rent
    pub monthly_rent: f64,

    /// Total monthly operating expenses (excluding debt service)
    pub monthly_expenses: f64,

    /// Net monthly cash flow after all expenses and debt service
    pub monthly_cash_flow: f64,

    /// Vacancy rate as an annual fraction
    pub vacancy_rate: f64,

    /// Gross annual rental income for tax calculations
    pub annual_income: f64,

    /// Current note rate (annual fraction)
    pub current_interest_rate: f64,

    /// Outstanding loan principal
    pub loan_amount: f64,

    /// Remaining loan term in months
    pub loan_term_months: u32,

    /// Cash invested at acquisition
    pub down_payment: f64,

    /// Annual return on investment, whole-number percent (3.4 = 3.4%)
    pub annual_roi: f64,
}

impl PropertyFinancials {
    /// Create a snapshot from acquisition-level inputs, deriving the
    /// cash flow, income and ROI fields
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        property_value: f64,
        purchase_price: f64,
        monthly_rent: f64,
        monthly_expenses: f64,
        loan_amount: f64,
        current_interest_rate: f64,
        loan_term_months: u32,
        down_payment: f64,
    ) -> Self {
        let monthly_cash_flow = monthly_rent - monthly_expenses;
        let annual_roi = if down_payment > 0.0 {
            monthly_cash_flow * 12.0 / down_payment * 100.0
        } else {
            0.0
        };

        Self {
            property_value,
            purchase_price,
            current_market_value: property_value,
            monthly_rent,
            monthly_expenses,
            monthly_cash_flow,
            vacancy_rate: 0.05,
            annual_income: monthly_rent * 12.0,
            current_interest_rate,
            loan_amount,
            loan_term_months,
            down_payment,
            annual_roi,
        }
    }

    /// Current equity position (value net of outstanding debt)
    pub fn equity(&self) -> f64 {
        self.property_value - self.loan_amount
    }

    /// Net operating income: effective gross income less operating expenses
    pub fn net_operating_income(&self) -> f64 {
        self.monthly_rent * 12.0 * (1.0 - self.vacancy_rate) - self.monthly_expenses * 12.0
    }

    /// Loan-to-value ratio; 0 when the property value is 0
    pub fn ltv(&self) -> f64 {
        if self.property_value <= 0.0 {
            return 0.0;
        }
        self.loan_amount / self.property_value
    }

    /// Capitalization rate as a fraction; 0 when the property value is 0
    pub fn cap_rate(&self) -> f64 {
        if self.property_value <= 0.0 {
            return 0.0;
        }
        self.net_operating_income() / self.property_value
    }

    /// Cash-on-cash return as a fraction; 0 when no cash was invested
    pub fn cash_on_cash(&self) -> f64 {
        if self.down_payment <= 0.0 {
            return 0.0;
        }
        self.monthly_cash_flow * 12.0 / self.down_payment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_derived_fields() {
        let p = test_property();

        assert_eq!(p.monthly_cash_flow, 1_000.0);
        assert_eq!(p.annual_income, 30_000.0);
        // 12000 / 70000 * 100 = 17.14%
        assert!((p.annual_roi - 17.142857).abs() < 0.001);
    }

    #[test]
    fn test_ratios() {
        let p = test_property();

        assert!((p.ltv() - 240_000.0 / 350_000.0).abs() < 1e-12);
        assert!((p.cash_on_cash() - 12_000.0 / 70_000.0).abs() < 1e-12);

        // NOI = 30000 * 0.95 - 18000 = 10500
        assert!((p.net_operating_income() - 10_500.0).abs() < 1e-9);
        assert!((p.cap_rate() - 10_500.0 / 350_000.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_denominators() {
        let mut p = test_property();
        p.property_value = 0.0;
        p.down_payment = 0.0;

        assert_eq!(p.ltv(), 0.0);
        assert_eq!(p.cap_rate(), 0.0);
        assert_eq!(p.cash_on_cash(), 0.0);
    }

    #[test]
    fn test_recovery_periods() {
        assert_eq!(InvestmentType::Residential.recovery_period_years(), 27.5);
        assert_eq!(InvestmentType::Commercial.recovery_period_years(), 39.0);
    }
}
