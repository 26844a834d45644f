//! Market condition factors and the market adjustment transform
//!
//! All adjustment fields are fractional deltas applied multiplicatively:
//! `adjusted = base * (1 + adjustment)`, so `-0.3` means a 30% reduction.

use crate::property::PropertyFinancials;
use serde::{Deserialize, Serialize};

/// Broad market regime classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketType {
    /// Seller's market: low vacancy, strong rent growth and appreciation
    Hot,
    /// Balanced market
    Stable,
    /// Buyer's market: elevated vacancy, weak growth
    Slow,
}

impl MarketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketType::Hot => "Hot",
            MarketType::Stable => "Stable",
            MarketType::Slow => "Slow",
        }
    }
}

/// Market condition assumptions for a single regime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConditions {
    pub market_type: MarketType,

    /// Fractional shift applied to the baseline vacancy rate
    pub vacancy_rate_adjustment: f64,

    /// Expected annual rent growth (fraction)
    pub rent_growth_rate: f64,

    /// Expected annual appreciation (fraction)
    pub appreciation_rate: f64,

    /// Fractional shift applied to the baseline cap rate
    pub cap_rate_adjustment: f64,

    /// Assumed annual inflation (fraction)
    pub inflation_rate: f64,
}

impl MarketConditions {
    /// Hot market calibration
    pub fn hot() -> Self {
        Self {
            market_type: MarketType::Hot,
            vacancy_rate_adjustment: -0.3,
            rent_growth_rate: 0.05,
            appreciation_rate: 0.06,
            cap_rate_adjustment: -0.1,
            inflation_rate: 0.03,
        }
    }

    /// Stable market calibration (identity adjustments)
    pub fn stable() -> Self {
        Self {
            market_type: MarketType::Stable,
            vacancy_rate_adjustment: 0.0,
            rent_growth_rate: 0.03,
            appreciation_rate: 0.04,
            cap_rate_adjustment: 0.0,
            inflation_rate: 0.025,
        }
    }

    /// Slow market calibration
    pub fn slow() -> Self {
        Self {
            market_type: MarketType::Slow,
            vacancy_rate_adjustment: 0.4,
            rent_growth_rate: 0.01,
            appreciation_rate: 0.015,
            cap_rate_adjustment: 0.1,
            inflation_rate: 0.02,
        }
    }

    /// Get the calibration for a market type
    pub fn for_type(market_type: MarketType) -> Self {
        match market_type {
            MarketType::Hot => Self::hot(),
            MarketType::Stable => Self::stable(),
            MarketType::Slow => Self::slow(),
        }
    }
}

impl Default for MarketConditions {
    fn default() -> Self {
        Self::stable()
    }
}

/// Market-adjusted baseline figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketAdjustments {
    pub market_type: MarketType,
    pub adjusted_vacancy_rate: f64,
    pub projected_annual_rent: f64,
    pub projected_value: f64,
    pub adjusted_cap_rate: f64,
}

/// Apply market condition adjustments to a property baseline
///
/// Every transform is `base * (1 + adjustment)`; rent and value use the
/// one-year growth rates.
pub fn calculate_market_adjustments(
    property: &PropertyFinancials,
    conditions: &MarketConditions,
) -> MarketAdjustments {
    MarketAdjustments {
        market_type: conditions.market_type,
        adjusted_vacancy_rate: property.vacancy_rate * (1.0 + conditions.vacancy_rate_adjustment),
        projected_annual_rent: property.monthly_rent * 12.0 * (1.0 + conditions.rent_growth_rate),
        projected_value: property.property_value * (1.0 + conditions.appreciation_rate),
        adjusted_cap_rate: property.cap_rate() * (1.0 + conditions.cap_rate_adjustment),
    }
}
