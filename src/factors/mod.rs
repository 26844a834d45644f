//! Adjustment factor models: market, seasonal, property age and location

mod age;
mod location;
mod market;
mod seasonal;

pub use age::{calculate_age_adjustments, AgeAdjustments, PropertyAgeFactors};
pub use location::{
    calculate_location_adjustments, LocationAdjustments, LocationFactors, LocationType,
};
pub use market::{calculate_market_adjustments, MarketAdjustments, MarketConditions, MarketType};
pub use seasonal::{
    calculate_seasonal_adjustments, Season, SeasonalAdjustments, SeasonalFactors,
};

/// Container for all underwriting factor assumptions
#[derive(Debug, Clone)]
pub struct Factors {
    pub market: MarketConditions,
    pub seasonal: SeasonalFactors,
    pub age: PropertyAgeFactors,
    pub location: LocationFactors,
}

impl Factors {
    /// Create factors with the default underwriting calibration:
    /// stable market, standard seasonality, mid-age building, suburban
    pub fn default_underwriting() -> Self {
        Self {
            market: MarketConditions::stable(),
            seasonal: SeasonalFactors::default_factors(),
            age: PropertyAgeFactors::default(),
            location: LocationFactors::suburban(),
        }
    }

    /// Same defaults under a specific market regime
    pub fn for_market(market: MarketConditions) -> Self {
        Self {
            market,
            ..Self::default_underwriting()
        }
    }
}

impl Default for Factors {
    fn default() -> Self {
        Self::default_underwriting()
    }
}
