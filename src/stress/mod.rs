//! Stress testing: combined worst-case shock and four-scenario runs

mod engine;
mod scenarios;

pub use engine::{
    calculate_stress_test, run_comprehensive_stress_test, ComprehensiveStressTestResult,
    RiskLevel, ScenarioResult, StressShock, StressTestResult,
};
pub use scenarios::{
    default_stress_scenarios, InterestRateShockScenario, MarketCorrectionScenario,
    OperatingShockScenario, RecessionScenario, StressScenarios,
};
