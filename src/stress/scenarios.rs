//! Fixed stress scenario configurations
//!
//! Shock deltas are whole-number percents (`rent_decline: 15.0` = rent
//! falls 15%); the interest rate shock is an annual-rate fraction to
//! match how note rates are carried everywhere else.

use serde::{Deserialize, Serialize};

/// Broad economic downturn: income, occupancy, expenses and value all move
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecessionScenario {
    pub rent_decline: f64,
    pub vacancy_increase: f64,
    pub expense_increase: f64,
    pub value_decline: f64,

    /// How long the downturn income shock persists
    pub duration_months: u32,

    pub description: String,
}

impl Default for RecessionScenario {
    fn default() -> Self {
        Self {
            rent_decline: 15.0,
            vacancy_increase: 10.0,
            expense_increase: 10.0,
            value_decline: 20.0,
            duration_months: 18,
            description: "Broad recession: rents fall 15%, vacancy rises 10%, expenses rise 10% \
                          and values decline 20% over an 18-month downturn"
                .to_string(),
        }
    }
}

/// Sustained rise in interest rates repricing the debt service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestRateShockScenario {
    /// Rate increase as an annual fraction (0.02 = +200bp)
    pub rate_increase: f64,

    pub description: String,
}

impl Default for InterestRateShockScenario {
    fn default() -> Self {
        Self {
            rate_increase: 0.02,
            description: "Interest rates rise 200 basis points and the debt reprices at the \
                          higher rate for a full year"
                .to_string(),
        }
    }
}

/// Operating cost blowout plus a one-time major repair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatingShockScenario {
    pub expense_increase: f64,

    /// One-time repair bill (roof, HVAC, foundation)
    pub one_time_repair_cost: f64,

    pub description: String,
}

impl Default for OperatingShockScenario {
    fn default() -> Self {
        Self {
            expense_increase: 30.0,
            one_time_repair_cost: 15_000.0,
            description: "Operating expenses run 30% over budget for a year alongside a $15,000 \
                          one-time repair"
                .to_string(),
        }
    }
}

/// Price correction with modest rent softening
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketCorrectionScenario {
    pub value_decline: f64,
    pub rent_decline: f64,

    pub description: String,
}

impl Default for MarketCorrectionScenario {
    fn default() -> Self {
        Self {
            value_decline: 15.0,
            rent_decline: 5.0,
            description: "Market correction: values fall 15% and rents soften 5% without a wider \
                          downturn"
                .to_string(),
        }
    }
}

/// The four fixed stress scenarios run by the comprehensive test
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StressScenarios {
    pub recession: RecessionScenario,
    pub interest_rate_shock: InterestRateShockScenario,
    pub operating_shock: OperatingShockScenario,
    pub market_correction: MarketCorrectionScenario,
}

/// Default calibration of all four scenarios
pub fn default_stress_scenarios() -> StressScenarios {
    StressScenarios::default()
}
