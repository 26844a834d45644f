//! Property age cost factors
//!
//! Older buildings carry higher maintenance, utility and insurance costs.
//! Multipliers apply directly to the baseline cost (`adjusted = base * m`).

use serde::{Deserialize, Serialize};

/// Cost factors for a property of a given age
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyAgeFactors {
    /// Building age in years
    pub age: u32,

    pub maintenance_cost_multiplier: f64,
    pub utility_efficiency_multiplier: f64,
    pub insurance_cost_multiplier: f64,

    /// Total expected structural lifespan in years
    pub expected_lifespan: u32,
}

impl PropertyAgeFactors {
    /// Default calibration for an age bracket
    pub fn for_age(age: u32) -> Self {
        let (maintenance, utility, insurance, lifespan) = if age <= 5 {
            (0.85, 0.95, 0.95, 75)
        } else if age <= 15 {
            (1.0, 1.0, 1.0, 65)
        } else if age <= 30 {
            (1.2, 1.1, 1.1, 55)
        } else if age <= 50 {
            (1.45, 1.25, 1.2, 50)
        } else {
            (1.75, 1.4, 1.35, 45)
        };

        Self {
            age,
            maintenance_cost_multiplier: maintenance,
            utility_efficiency_multiplier: utility,
            insurance_cost_multiplier: insurance,
            expected_lifespan: lifespan,
        }
    }

    /// Remaining expected lifespan, floored at zero
    pub fn remaining_lifespan(&self) -> u32 {
        self.expected_lifespan.saturating_sub(self.age)
    }
}

impl Default for PropertyAgeFactors {
    fn default() -> Self {
        Self::for_age(20)
    }
}

/// Age-adjusted monthly operating costs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeAdjustments {
    pub adjusted_maintenance: f64,
    pub adjusted_utilities: f64,
    pub adjusted_insurance: f64,
    pub remaining_lifespan: u32,
}

/// Apply age factors to baseline monthly cost components
pub fn calculate_age_adjustments(
    base_maintenance: f64,
    base_utilities: f64,
    base_insurance: f64,
    factors: &PropertyAgeFactors,
) -> AgeAdjustments {
    AgeAdjustments {
        adjusted_maintenance: base_maintenance * factors.maintenance_cost_multiplier,
        adjusted_utilities: base_utilities * factors.utility_efficiency_multiplier,
        adjusted_insurance: base_insurance * factors.insurance_cost_multiplier,
        remaining_lifespan: factors.remaining_lifespan(),
    }
}
