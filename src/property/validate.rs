//! Optional input validation for property snapshots
//!
//! The calculators themselves are total: they accept any finite input and
//! return a value, propagating NaN/infinity where a denominator is zero.
//! Callers that want to reject out-of-domain inputs up front can run
//! `validate` before analysis.

use super::PropertyFinancials;
use thiserror::Error;

/// Validation failures for a property snapshot
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("{field} must be within [0, 1], got {value}")]
    RateOutOfRange { field: &'static str, value: f64 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount { field, value });
    }
    Ok(())
}

fn check_rate(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field, value });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::RateOutOfRange { field, value });
    }
    Ok(())
}

/// Check that all monetary amounts are non-negative and all fractional
/// rates are within [0, 1]
///
/// Signed fields (`monthly_cash_flow`, `annual_roi`) are only required to
/// be finite; a property can legitimately run negative.
pub fn validate(property: &PropertyFinancials) -> Result<(), ValidationError> {
    check_amount("property_value", property.property_value)?;
    check_amount("purchase_price", property.purchase_price)?;
    check_amount("current_market_value", property.current_market_value)?;
    check_amount("monthly_rent", property.monthly_rent)?;
    check_amount("monthly_expenses", property.monthly_expenses)?;
    check_amount("annual_income", property.annual_income)?;
    check_amount("loan_amount", property.loan_amount)?;
    check_amount("down_payment", property.down_payment)?;

    check_rate("vacancy_rate", property.vacancy_rate)?;
    check_rate("current_interest_rate", property.current_interest_rate)?;

    for (field, value) in [
        ("monthly_cash_flow", property.monthly_cash_flow),
        ("annual_roi", property.annual_roi),
    ] {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field, value });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_property() -> PropertyFinancials {
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
    fn test_valid_property_passes() {
        assert_eq!(validate(&valid_property()), Ok(()));
    }

    #[test]
    fn test_negative_rent_rejected() {
        let mut p = valid_property();
        p.monthly_rent = -100.0;

        assert_eq!(
            validate(&p),
            Err(ValidationError::NegativeAmount {
                field: "monthly_rent",
                value: -100.0
            })
        );
    }

    #[test]
    fn test_vacancy_rate_bounds() {
        let mut p = valid_property();
        p.vacancy_rate = 1.5;

        assert_eq!(
            validate(&p),
            Err(ValidationError::RateOutOfRange {
                field: "vacancy_rate",
                value: 1.5
            })
        );
    }

    #[test]
    fn test_negative_cash_flow_allowed() {
        let mut p = valid_property();
        p.monthly_cash_flow = -350.0;

        assert_eq!(validate(&p), Ok(()));
    }
}
