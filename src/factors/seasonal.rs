//! Seasonal vacancy, maintenance and occupancy factors
//!
//! Seasons are bucketed from the calendar month: summer is months 6-8,
//! winter is 12, 1 and 2, spring is 3-5, and everything else is fall.

use serde::{Deserialize, Serialize};

/// Season bucket for a calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Bucket a calendar month (1-12) into a season
    pub fn from_month(month: u32) -> Self {
        match month {
            6..=8 => Season::Summer,
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            _ => Season::Fall,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

/// Seasonal adjustment factors
///
/// Per-season vacancy fields are fractional deltas (`-0.2` = 20% fewer
/// vacancies than baseline); occupancy multipliers apply directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalFactors {
    pub spring_vacancy_rate: f64,
    pub summer_vacancy_rate: f64,
    pub fall_vacancy_rate: f64,
    pub winter_vacancy_rate: f64,

    /// Multiplier on baseline maintenance cost for the season
    pub maintenance_multiplier: f64,

    /// Occupancy multipliers by calendar quarter
    pub q1_occupancy: f64,
    pub q2_occupancy: f64,
    pub q3_occupancy: f64,
    pub q4_occupancy: f64,
}

impl SeasonalFactors {
    /// Default calibration: leasing demand peaks in summer, softens in winter
    pub fn default_factors() -> Self {
        Self {
            spring_vacancy_rate: -0.1,
            summer_vacancy_rate: -0.2,
            fall_vacancy_rate: 0.1,
            winter_vacancy_rate: 0.3,
            maintenance_multiplier: 1.15,
            q1_occupancy: 0.94,
            q2_occupancy: 0.97,
            q3_occupancy: 1.0,
            q4_occupancy: 0.92,
        }
    }

    /// Identity factors: no seasonal effect
    pub fn flat() -> Self {
        Self {
            spring_vacancy_rate: 0.0,
            summer_vacancy_rate: 0.0,
            fall_vacancy_rate: 0.0,
            winter_vacancy_rate: 0.0,
            maintenance_multiplier: 1.0,
            q1_occupancy: 1.0,
            q2_occupancy: 1.0,
            q3_occupancy: 1.0,
            q4_occupancy: 1.0,
        }
    }

    /// Vacancy adjustment for a season
    pub fn vacancy_adjustment(&self, season: Season) -> f64 {
        match season {
            Season::Spring => self.spring_vacancy_rate,
            Season::Summer => self.summer_vacancy_rate,
            Season::Fall => self.fall_vacancy_rate,
            Season::Winter => self.winter_vacancy_rate,
        }
    }

    /// Occupancy multiplier for the quarter containing a calendar month
    pub fn occupancy_for_month(&self, month: u32) -> f64 {
        match (month.clamp(1, 12) - 1) / 3 + 1 {
            1 => self.q1_occupancy,
            2 => self.q2_occupancy,
            3 => self.q3_occupancy,
            _ => self.q4_occupancy,
        }
    }
}

impl Default for SeasonalFactors {
    fn default() -> Self {
        Self::default_factors()
    }
}

/// Seasonally adjusted figures for one calendar month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalAdjustments {
    pub season: Season,
    pub adjusted_vacancy_rate: f64,
    pub maintenance_multiplier: f64,
    pub occupancy_multiplier: f64,
}

/// Apply seasonal factors to a baseline vacancy rate for a calendar month
pub fn calculate_seasonal_adjustments(
    base_vacancy_rate: f64,
    factors: &SeasonalFactors,
    month: u32,
) -> SeasonalAdjustments {
    let season = Season::from_month(month);

    SeasonalAdjustments {
        season,
        adjusted_vacancy_rate: base_vacancy_rate * (1.0 + factors.vacancy_adjustment(season)),
        maintenance_multiplier: factors.maintenance_multiplier,
        occupancy_multiplier: factors.occupancy_for_month(month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_bucketing() {
        assert_eq!(Season::from_month(6), Season::Summer);
        assert_eq!(Season::from_month(8), Season::Summer);
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(1), Season::Winter);
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(5), Season::Spring);
        assert_eq!(Season::from_month(9), Season::Fall);
        assert_eq!(Season::from_month(11), Season::Fall);
    }

    #[test]
    fn test_identity_factors_preserve_vacancy() {
        let factors = SeasonalFactors::flat();

        for month in 1..=12 {
            let adj = calculate_seasonal_adjustments(0.07, &factors, month);
            assert_eq!(adj.adjusted_vacancy_rate, 0.07, "month {}", month);
        }
    }

    #[test]
    fn test_summer_lowers_vacancy() {
        let factors = SeasonalFactors::default_factors();

        let summer = calculate_seasonal_adjustments(0.05, &factors, 7);
        let winter = calculate_seasonal_adjustments(0.05, &factors, 1);

        assert!(summer.adjusted_vacancy_rate < 0.05);
        assert!(winter.adjusted_vacancy_rate > 0.05);
        // 0.05 * 0.8 = 0.04
        assert!((summer.adjusted_vacancy_rate - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_occupancy_quarters() {
        let factors = SeasonalFactors::default_factors();

        assert_eq!(factors.occupancy_for_month(1), factors.q1_occupancy);
        assert_eq!(factors.occupancy_for_month(3), factors.q1_occupancy);
        assert_eq!(factors.occupancy_for_month(4), factors.q2_occupancy);
        assert_eq!(factors.occupancy_for_month(9), factors.q3_occupancy);
        assert_eq!(factors.occupancy_for_month(12), factors.q4_occupancy);
    }
}
