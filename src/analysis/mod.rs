//! Scenario calculators: exit strategies, refinancing, taxes, sensitivity

mod exit;
mod refinance;
mod sensitivity;
mod tax;
mod tax_enhanced;

pub use exit::{
    analyze_exit_strategies, analyze_exit_strategy, default_exit_strategies, ExitStrategy,
    ExitStrategyAnalysis,
};
pub use refinance::{
    analyze_refinance_scenario, analyze_refinance_scenarios, monthly_payment,
    remaining_balance_at, RefinanceAnalysis, RefinanceScenario,
};
pub use sensitivity::{
    calculate_confidence_intervals, calculate_inflation_adjustment,
    calculate_inflation_adjustments, calculate_sensitivity_analysis,
    default_sensitivity_scenarios, ConfidenceInterval, InflationProjection, SensitivityResult,
    SensitivityScenario,
};
pub use tax::{calculate_tax_implications, default_tax_implications, TaxAnalysis, TaxImplications};
pub use tax_enhanced::{
    calculate_enhanced_tax_implications, EnhancedTaxAnalysis, EnhancedTaxImplications,
    BUILDING_BASIS_SHARE, QBI_AGI_WARNING_THRESHOLD, SALT_CAP,
};
