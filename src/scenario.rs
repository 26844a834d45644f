//! Underwriting runner for efficient batch analysis
//!
//! Pre-loads factor calibrations once, then allows running many
//! properties or market scenarios without rebuilding the presets.

use crate::analysis::{
    analyze_exit_strategies, calculate_sensitivity_analysis, default_exit_strategies,
    default_sensitivity_scenarios, ExitStrategy, ExitStrategyAnalysis, SensitivityResult,
    SensitivityScenario,
};
use crate::factors::{
    calculate_age_adjustments, calculate_location_adjustments, calculate_market_adjustments,
    calculate_seasonal_adjustments, AgeAdjustments, Factors, LocationAdjustments,
    MarketAdjustments, MarketConditions, SeasonalAdjustments,
};
use crate::property::PropertyFinancials;
use crate::risk::{
    calculate_enhanced_risk_score, default_risk_factors, EnhancedRiskScore, LoanProfile,
    RiskFactors,
};
use crate::stress::{
    default_stress_scenarios, run_comprehensive_stress_test, ComprehensiveStressTestResult,
    StressScenarios,
};
use serde::{Deserialize, Serialize};

/// Assumed share of monthly expenses spent on maintenance, utilities and
/// insurance when the caller has no itemized breakdown
const MAINTENANCE_EXPENSE_SHARE: f64 = 0.35;
const UTILITIES_EXPENSE_SHARE: f64 = 0.25;
const INSURANCE_EXPENSE_SHARE: f64 = 0.15;

/// Configuration for one underwriting run
#[derive(Debug, Clone)]
pub struct UnderwritingConfig {
    /// Calendar month (1-12) for the seasonal adjustment
    pub month: u32,

    pub exit_strategies: Vec<ExitStrategy>,
    pub sensitivity_scenarios: Vec<SensitivityScenario>,
    pub stress_scenarios: StressScenarios,
    pub risk_factors: RiskFactors,

    /// Financing profile; derived from the snapshot when None
    pub loan: Option<LoanProfile>,
}

impl Default for UnderwritingConfig {
    fn default() -> Self {
        Self {
            month: 6,
            exit_strategies: default_exit_strategies(),
            sensitivity_scenarios: default_sensitivity_scenarios(),
            stress_scenarios: default_stress_scenarios(),
            risk_factors: default_risk_factors(),
            loan: None,
        }
    }
}

/// Complete underwriting output for one property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnderwritingResult {
    pub seasonal: SeasonalAdjustments,
    pub market: MarketAdjustments,
    pub age: AgeAdjustments,
    pub location: LocationAdjustments,
    pub risk: EnhancedRiskScore,
    pub stress: ComprehensiveStressTestResult,
    pub exit_strategies: Vec<ExitStrategyAnalysis>,
    pub sensitivity: Vec<SensitivityResult>,
}

/// Pre-loaded underwriting runner
///
/// # Example
/// ```ignore
/// let runner = UnderwritingRunner::new();
///
/// for market in [MarketConditions::hot(), MarketConditions::slow()] {
///     let results = runner.run_markets(&property, &config, &[market]);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct UnderwritingRunner {
    /// Pre-loaded factor calibrations
    factors: Factors,
}

impl UnderwritingRunner {
    /// Create runner with the default underwriting factors
    pub fn new() -> Self {
        Self {
            factors: Factors::default_underwriting(),
        }
    }

    /// Create runner with pre-built factors
    pub fn with_factors(factors: Factors) -> Self {
        Self { factors }
    }

    /// Run the full underwriting for a single property
    pub fn run(
        &self,
        property: &PropertyFinancials,
        config: &UnderwritingConfig,
    ) -> UnderwritingResult {
        let loan = config
            .loan
            .clone()
            .unwrap_or_else(|| LoanProfile::from_financials(property));

        let seasonal = calculate_seasonal_adjustments(
            property.vacancy_rate,
            &self.factors.seasonal,
            config.month,
        );
        let market = calculate_market_adjustments(property, &self.factors.market);

        let age = calculate_age_adjustments(
            property.monthly_expenses * MAINTENANCE_EXPENSE_SHARE,
            property.monthly_expenses * UTILITIES_EXPENSE_SHARE,
            property.monthly_expenses * INSURANCE_EXPENSE_SHARE,
            &self.factors.age,
        );
        let location = calculate_location_adjustments(
            property.property_value,
            property.monthly_expenses * INSURANCE_EXPENSE_SHARE * 12.0,
            property.monthly_expenses * MAINTENANCE_EXPENSE_SHARE * 12.0,
            property.monthly_expenses * UTILITIES_EXPENSE_SHARE * 12.0,
            0.0,
            &self.factors.location,
        );

        let risk = calculate_enhanced_risk_score(&config.risk_factors, &self.factors.market, &loan);
        let stress = run_comprehensive_stress_test(property, &config.stress_scenarios);
        let exit_strategies = analyze_exit_strategies(property, &config.exit_strategies);
        let sensitivity = calculate_sensitivity_analysis(property, &config.sensitivity_scenarios);

        UnderwritingResult {
            seasonal,
            market,
            age,
            location,
            risk,
            stress,
            exit_strategies,
            sensitivity,
        }
    }

    /// Run the same config for multiple properties
    pub fn run_batch(
        &self,
        properties: &[PropertyFinancials],
        config: &UnderwritingConfig,
    ) -> Vec<UnderwritingResult> {
        properties.iter().map(|p| self.run(p, config)).collect()
    }

    /// Run one property across several market regimes
    pub fn run_markets(
        &self,
        property: &PropertyFinancials,
        config: &UnderwritingConfig,
        markets: &[MarketConditions],
    ) -> Vec<UnderwritingResult> {
        markets
            .iter()
            .map(|market| {
                let runner = Self::with_factors(Factors {
                    market: market.clone(),
                    ..self.factors.clone()
                });
                runner.run(property, config)
            })
            .collect()
    }

    /// Get reference to the factors for inspection/modification
    pub fn factors(&self) -> &Factors {
        &self.factors
    }

    /// Get mutable reference to the factors for customization
    pub fn factors_mut(&mut self) -> &mut Factors {
        &mut self.factors
    }
}

impl Default for UnderwritingRunner {
    fn default() -> Self {
        Self::new()
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
    fn test_full_run_shape() {
        let runner = UnderwritingRunner::new();
        let result = runner.run(&test_property(), &UnderwritingConfig::default());

        assert_eq!(result.stress.scenarios.len(), 4);
        assert_eq!(result.exit_strategies.len(), 3);
        assert!(!result.sensitivity.is_empty());
        assert!(result.risk.probability_of_loss > 0.0);
    }

    #[test]
    fn test_batch_run() {
        let runner = UnderwritingRunner::new();
        let properties = vec![test_property(), test_property()];

        let results = runner.run_batch(&properties, &UnderwritingConfig::default());
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_market_sweep_orders_risk() {
        let runner = UnderwritingRunner::new();
        let config = UnderwritingConfig::default();

        let markets = vec![
            MarketConditions::hot(),
            MarketConditions::stable(),
            MarketConditions::slow(),
        ];
        let results = runner.run_markets(&test_property(), &config, &markets);

        assert_eq!(results.len(), 3);
        // Slow market carries the highest loss probability
        assert!(
            results[2].risk.probability_of_loss > results[0].risk.probability_of_loss,
            "slow market should be riskier than hot"
        );
    }
}
