//! Exit strategy ROI projections

use crate::property::PropertyFinancials;
use serde::{Deserialize, Serialize};

/// Parameters for a single exit strategy
///
/// All percentage fields are fractions (0.06 = 6%); `timeframe` is in
/// years and must be positive. A zero timeframe is caller responsibility
/// and produces a non-finite annualized ROI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitStrategy {
    /// Holding period in years
    pub timeframe: f64,

    /// Selling costs as a fraction of the projected sale price
    pub selling_costs: f64,

    /// Capital gains tax rate applied to the gain over purchase price
    pub capital_gains_tax: f64,

    /// Depreciation recapture rate applied to the same gain
    pub depreciation_recapture: f64,

    /// Assumed annual appreciation (fraction)
    pub market_appreciation: f64,
}

/// Standard short / medium / long hold strategies
pub fn default_exit_strategies() -> Vec<ExitStrategy> {
    vec![
        ExitStrategy {
            timeframe: 2.0,
            selling_costs: 0.06,
            capital_gains_tax: 0.15,
            depreciation_recapture: 0.25,
            market_appreciation: 0.04,
        },
        ExitStrategy {
            timeframe: 5.0,
            selling_costs: 0.06,
            capital_gains_tax: 0.15,
            depreciation_recapture: 0.25,
            market_appreciation: 0.04,
        },
        ExitStrategy {
            timeframe: 10.0,
            selling_costs: 0.06,
            capital_gains_tax: 0.20,
            depreciation_recapture: 0.25,
            market_appreciation: 0.04,
        },
    ]
}

/// Projected outcome of one exit strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitStrategyAnalysis {
    pub timeframe: f64,
    pub projected_value: f64,
    pub selling_costs: f64,

    /// Gain over purchase price. NOT clamped at zero: a sale below the
    /// purchase price produces a negative gain and therefore negative
    /// tax amounts (a rebate against other gains)
    pub taxable_gain: f64,

    pub capital_gains_tax: f64,
    pub depreciation_recapture_tax: f64,
    pub net_proceeds: f64,

    /// Total return over purchase price, whole-number percent
    pub roi: f64,

    /// Geometric annualized return, whole-number percent
    pub annualized_roi: f64,
}

/// Project the outcome of a single exit strategy
pub fn analyze_exit_strategy(
    property: &PropertyFinancials,
    strategy: &ExitStrategy,
) -> ExitStrategyAnalysis {
    let projected_value =
        property.current_market_value * (1.0 + strategy.market_appreciation).powf(strategy.timeframe);

    let selling_costs = projected_value * strategy.selling_costs;

    let taxable_gain = projected_value - property.purchase_price;
    let capital_gains_tax = taxable_gain * strategy.capital_gains_tax;
    let depreciation_recapture_tax = taxable_gain * strategy.depreciation_recapture;

    let net_proceeds = projected_value - selling_costs - capital_gains_tax - depreciation_recapture_tax;

    let roi = (net_proceeds - property.purchase_price) / property.purchase_price * 100.0;
    let annualized_roi = ((1.0 + roi / 100.0).powf(1.0 / strategy.timeframe) - 1.0) * 100.0;

    ExitStrategyAnalysis {
        timeframe: strategy.timeframe,
        projected_value,
        selling_costs,
        taxable_gain,
        capital_gains_tax,
        depreciation_recapture_tax,
        net_proceeds,
        roi,
        annualized_roi,
    }
}

/// Project all strategies against the same property baseline
pub fn analyze_exit_strategies(
    property: &PropertyFinancials,
    strategies: &[ExitStrategy],
) -> Vec<ExitStrategyAnalysis> {
    strategies
        .iter()
        .map(|s| analyze_exit_strategy(property, s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_property() -> PropertyFinancials {
        let mut p = PropertyFinancials::new(
            300_000.0,
            300_000.0,
            2_500.0,
            1_500.0,
            240_000.0,
            0.065,
            360,
            60_000.0,
        );
        p.current_market_value = 330_000.0;
        p
    }

    #[test]
    fn test_results_are_finite() {
        let property = test_property();
        let strategies = vec![
            ExitStrategy {
                timeframe: 2.0,
                selling_costs: 0.06,
                capital_gains_tax: 0.15,
                depreciation_recapture: 0.25,
                market_appreciation: 0.04,
            },
            ExitStrategy {
                timeframe: 5.0,
                selling_costs: 0.06,
                capital_gains_tax: 0.15,
                depreciation_recapture: 0.25,
                market_appreciation: 0.04,
            },
        ];

        let results = analyze_exit_strategies(&property, &strategies);
        assert_eq!(results.len(), 2);

        for r in &results {
            assert!(r.projected_value > 0.0);
            assert!(r.roi.is_finite());
            assert!(r.annualized_roi.is_finite());
        }

        // Longer hold at positive appreciation projects a higher price
        assert!(results[1].projected_value > results[0].projected_value);
    }

    #[test]
    fn test_two_year_projection_value() {
        let property = test_property();
        let strategies = default_exit_strategies();

        let result = analyze_exit_strategy(&property, &strategies[0]);

        // 330000 * 1.04^2 = 356928
        assert!((result.projected_value - 356_928.0).abs() < 0.01);
        assert!((result.taxable_gain - 56_928.0).abs() < 0.01);
    }

    #[test]
    fn test_negative_gain_produces_tax_rebate() {
        let mut property = test_property();
        property.current_market_value = 250_000.0;

        let strategy = ExitStrategy {
            timeframe: 1.0,
            selling_costs: 0.06,
            capital_gains_tax: 0.15,
            depreciation_recapture: 0.25,
            market_appreciation: 0.0,
        };

        let result = analyze_exit_strategy(&property, &strategy);

        assert!(result.taxable_gain < 0.0);
        assert!(result.capital_gains_tax < 0.0);
        assert!(result.depreciation_recapture_tax < 0.0);
    }

    #[test]
    fn test_annualized_equals_roi_for_one_year() {
        let property = test_property();
        let strategy = ExitStrategy {
            timeframe: 1.0,
            selling_costs: 0.06,
            capital_gains_tax: 0.15,
            depreciation_recapture: 0.25,
            market_appreciation: 0.04,
        };

        let result = analyze_exit_strategy(&property, &strategy);
        assert!((result.annualized_roi - result.roi).abs() < 1e-9);
    }
}
