//! Location-based cost factors

use serde::{Deserialize, Serialize};

/// Location classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    Urban,
    Suburban,
    Rural,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Urban => "Urban",
            LocationType::Suburban => "Suburban",
            LocationType::Rural => "Rural",
        }
    }
}

/// Cost factors for a location type
///
/// `property_tax_rate` is an annual fraction of property value; the
/// remaining fields are direct multipliers on baseline costs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationFactors {
    pub location_type: LocationType,
    pub property_tax_rate: f64,
    pub insurance_cost_multiplier: f64,
    pub maintenance_cost_multiplier: f64,
    pub utility_cost_multiplier: f64,
    pub transportation_cost_multiplier: f64,
}

impl LocationFactors {
    pub fn urban() -> Self {
        Self {
            location_type: LocationType::Urban,
            property_tax_rate: 0.021,
            insurance_cost_multiplier: 1.25,
            maintenance_cost_multiplier: 1.15,
            utility_cost_multiplier: 1.1,
            transportation_cost_multiplier: 0.85,
        }
    }

    pub fn suburban() -> Self {
        Self {
            location_type: LocationType::Suburban,
            property_tax_rate: 0.017,
            insurance_cost_multiplier: 1.0,
            maintenance_cost_multiplier: 1.0,
            utility_cost_multiplier: 1.0,
            transportation_cost_multiplier: 1.0,
        }
    }

    pub fn rural() -> Self {
        Self {
            location_type: LocationType::Rural,
            property_tax_rate: 0.012,
            insurance_cost_multiplier: 0.9,
            maintenance_cost_multiplier: 1.1,
            utility_cost_multiplier: 1.15,
            transportation_cost_multiplier: 1.3,
        }
    }

    /// Get the calibration for a location type
    pub fn for_type(location_type: LocationType) -> Self {
        match location_type {
            LocationType::Urban => Self::urban(),
            LocationType::Suburban => Self::suburban(),
            LocationType::Rural => Self::rural(),
        }
    }
}

impl Default for LocationFactors {
    fn default() -> Self {
        Self::suburban()
    }
}

/// Location-adjusted annual costs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAdjustments {
    pub location_type: LocationType,
    pub annual_property_tax: f64,
    pub adjusted_insurance: f64,
    pub adjusted_maintenance: f64,
    pub adjusted_utilities: f64,
    pub adjusted_transportation: f64,
}

/// Apply location factors to a property value and baseline annual costs
pub fn calculate_location_adjustments(
    property_value: f64,
    base_insurance: f64,
    base_maintenance: f64,
    base_utilities: f64,
    base_transportation: f64,
    factors: &LocationFactors,
) -> LocationAdjustments {
    LocationAdjustments {
        location_type: factors.location_type,
        annual_property_tax: property_value * factors.property_tax_rate,
        adjusted_insurance: base_insurance * factors.insurance_cost_multiplier,
        adjusted_maintenance: base_maintenance * factors.maintenance_cost_multiplier,
        adjusted_utilities: base_utilities * factors.utility_cost_multiplier,
        adjusted_transportation: base_transportation * factors.transportation_cost_multiplier,
    }
}
