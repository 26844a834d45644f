//! Inflation projections, sensitivity analysis and confidence intervals

use crate::property::PropertyFinancials;
use serde::{Deserialize, Serialize};

/// Inflation-adjusted value at one horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflationProjection {
    pub years: u32,
    pub adjusted_value: f64,
}

/// Compound a value forward at an annual inflation rate
pub fn calculate_inflation_adjustment(value: f64, annual_rate: f64, years: f64) -> f64 {
    value * (1.0 + annual_rate).powf(years)
}

/// Project a value across several horizons
pub fn calculate_inflation_adjustments(
    value: f64,
    annual_rate: f64,
    horizons: &[u32],
) -> Vec<InflationProjection> {
    horizons
        .iter()
        .map(|&years| InflationProjection {
            years,
            adjusted_value: calculate_inflation_adjustment(value, annual_rate, years as f64),
        })
        .collect()
}

/// One sensitivity scenario
///
/// Deltas are whole-number percents (`rent_change: -10.0` drops rent by
/// 10%), matching how scenarios are quoted upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityScenario {
    pub name: String,
    pub rent_change: f64,
    pub expense_change: f64,
    pub value_change: f64,
}

/// Standard one-sided and combined downside scenarios
pub fn default_sensitivity_scenarios() -> Vec<SensitivityScenario> {
    vec![
        SensitivityScenario {
            name: "Rent -10%".to_string(),
            rent_change: -10.0,
            expense_change: 0.0,
            value_change: 0.0,
        },
        SensitivityScenario {
            name: "Rent +10%".to_string(),
            rent_change: 10.0,
            expense_change: 0.0,
            value_change: 0.0,
        },
        SensitivityScenario {
            name: "Expenses +15%".to_string(),
            rent_change: 0.0,
            expense_change: 15.0,
            value_change: 0.0,
        },
        SensitivityScenario {
            name: "Value -10%".to_string(),
            rent_change: 0.0,
            expense_change: 0.0,
            value_change: -10.0,
        },
        SensitivityScenario {
            name: "Combined downside".to_string(),
            rent_change: -10.0,
            expense_change: 10.0,
            value_change: -10.0,
        },
    ]
}

/// Scenario outcome relative to the baseline cash flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityResult {
    pub name: String,
    pub adjusted_monthly_rent: f64,
    pub adjusted_monthly_expenses: f64,
    pub adjusted_property_value: f64,
    pub adjusted_cash_flow: f64,
    pub cash_flow_change: f64,

    /// Whole-number percent vs the baseline cash flow; non-finite when
    /// the baseline cash flow is zero (unguarded)
    pub cash_flow_change_pct: f64,
}

/// Apply each scenario's deltas independently to the baseline
pub fn calculate_sensitivity_analysis(
    property: &PropertyFinancials,
    scenarios: &[SensitivityScenario],
) -> Vec<SensitivityResult> {
    scenarios
        .iter()
        .map(|scenario| {
            let adjusted_monthly_rent = property.monthly_rent * (1.0 + scenario.rent_change / 100.0);
            let adjusted_monthly_expenses =
                property.monthly_expenses * (1.0 + scenario.expense_change / 100.0);
            let adjusted_property_value =
                property.property_value * (1.0 + scenario.value_change / 100.0);

            let adjusted_cash_flow = adjusted_monthly_rent - adjusted_monthly_expenses;
            let cash_flow_change = adjusted_cash_flow - property.monthly_cash_flow;

            SensitivityResult {
                name: scenario.name.clone(),
                adjusted_monthly_rent,
                adjusted_monthly_expenses,
                adjusted_property_value,
                adjusted_cash_flow,
                cash_flow_change,
                cash_flow_change_pct: cash_flow_change / property.monthly_cash_flow * 100.0,
            }
        })
        .collect()
}

/// Symmetric confidence interval around a point estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub point_estimate: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub confidence_level: f64,
    pub margin: f64,
}

/// Two-sided z value for the supported confidence levels
fn z_value(confidence_level: f64) -> f64 {
    if confidence_level >= 0.99 {
        2.576
    } else if confidence_level >= 0.95 {
        1.96
    } else if confidence_level >= 0.90 {
        1.645
    } else {
        1.282
    }
}

/// Build a confidence interval from a point estimate and a volatility
/// expressed as a fraction of the estimate
///
/// The interval is symmetric (`upper - point == point - lower`) unless
/// the lower bound is clamped at zero.
pub fn calculate_confidence_intervals(
    point_estimate: f64,
    volatility: f64,
    confidence_level: f64,
) -> ConfidenceInterval {
    let margin = z_value(confidence_level) * volatility * point_estimate;

    ConfidenceInterval {
        point_estimate,
        lower_bound: (point_estimate - margin).max(0.0),
        upper_bound: point_estimate + margin,
        confidence_level,
        margin,
    }
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
    fn test_inflation_compounding() {
        // 1000 at 3% over 10 years = 1343.92
        let adjusted = calculate_inflation_adjustment(1_000.0, 0.03, 10.0);
        assert_relative_eq!(adjusted, 1_343.9164, epsilon = 0.001);
    }

    #[test]
    fn test_inflation_horizons() {
        let projections = calculate_inflation_adjustments(1_000.0, 0.025, &[1, 5, 10]);

        assert_eq!(projections.len(), 3);
        assert!(projections[0].adjusted_value < projections[1].adjusted_value);
        assert!(projections[1].adjusted_value < projections[2].adjusted_value);
    }

    #[test]
    fn test_sensitivity_rent_drop() {
        let property = test_property();
        let scenarios = vec![SensitivityScenario {
            name: "Rent -10%".to_string(),
            rent_change: -10.0,
            expense_change: 0.0,
            value_change: 0.0,
        }];

        let results = calculate_sensitivity_analysis(&property, &scenarios);
        let r = &results[0];

        assert_eq!(r.adjusted_monthly_rent, 2_250.0);
        assert_eq!(r.adjusted_cash_flow, 750.0);
        assert_eq!(r.cash_flow_change, -250.0);
        assert_relative_eq!(r.cash_flow_change_pct, -25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sensitivity_scenarios_independent() {
        let property = test_property();
        let results = calculate_sensitivity_analysis(&property, &default_sensitivity_scenarios());

        // The value-only scenario leaves cash flow untouched
        let value_only = results.iter().find(|r| r.name == "Value -10%").unwrap();
        assert_eq!(value_only.cash_flow_change, 0.0);
        assert!((value_only.adjusted_property_value - 315_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_confidence_interval_symmetry() {
        let ci = calculate_confidence_intervals(1_000.0, 0.1, 0.95);

        assert_relative_eq!(ci.upper_bound - ci.point_estimate, ci.point_estimate - ci.lower_bound, epsilon = 1e-9);
        assert_relative_eq!(ci.margin, 196.0, epsilon = 1e-9);
    }

    #[test]
    fn test_confidence_interval_lower_clamp() {
        // Margin exceeds the estimate: lower bound floors at zero
        let ci = calculate_confidence_intervals(100.0, 0.8, 0.99);

        assert_eq!(ci.lower_bound, 0.0);
        assert!(ci.upper_bound - ci.point_estimate > ci.point_estimate - ci.lower_bound);
    }

    #[test]
    fn test_wider_interval_at_higher_confidence() {
        let ci_90 = calculate_confidence_intervals(1_000.0, 0.1, 0.90);
        let ci_99 = calculate_confidence_intervals(1_000.0, 0.1, 0.99);

        assert!(ci_99.margin > ci_90.margin);
    }
}
