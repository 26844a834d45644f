//! Weighted risk scoring
//!
//! Five 1-10 factor scores (10 = highest risk) combine through fixed
//! weights into an overall score, bucketed into a category with
//! rule-based recommendations. Financing risk is amplified by balloon
//! proximity and interest-only structure before weighting.

use crate::analysis::monthly_payment;
use crate::factors::{MarketConditions, MarketType};
use crate::property::PropertyFinancials;
use serde::{Deserialize, Serialize};

/// Risk factor scores on a 1-10 scale, 10 = highest risk
///
/// Note the orientation: `tenant_quality` is a RISK score; a 9 means
/// tenant quality is a major risk, not that tenants are excellent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactors {
    pub market_volatility: f64,
    pub tenant_quality: f64,
    pub property_condition: f64,
    pub location_stability: f64,
    pub financing_risk: f64,
}

/// Midpoint default: every factor at 5
pub fn default_risk_factors() -> RiskFactors {
    RiskFactors {
        market_volatility: 5.0,
        tenant_quality: 5.0,
        property_condition: 5.0,
        location_stability: 5.0,
        financing_risk: 5.0,
    }
}

/// Factor weights for the overall score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskWeights {
    pub market: f64,
    pub financing: f64,
    pub property: f64,
    pub location: f64,
    pub tenant: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            market: 0.25,
            financing: 0.30,
            property: 0.20,
            location: 0.15,
            tenant: 0.10,
        }
    }
}

/// Financing structure details feeding risk amplification and the
/// enhanced metric adjustments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanProfile {
    /// Years until a balloon payment comes due, if any
    pub balloon_due_years: Option<f64>,

    pub interest_only: bool,

    /// Debt service coverage ratio
    pub dscr: f64,

    /// Loan-to-value (fraction)
    pub ltv: f64,

    /// Cash-on-cash return (fraction)
    pub cash_on_cash: f64,

    /// Capitalization rate (fraction)
    pub cap_rate: f64,
}

impl LoanProfile {
    /// Derive the financing metrics from a property snapshot, assuming a
    /// fully amortizing loan with no balloon
    pub fn from_financials(property: &PropertyFinancials) -> Self {
        let annual_debt_service = monthly_payment(
            property.loan_amount,
            property.current_interest_rate,
            property.loan_term_months,
        ) * 12.0;

        let dscr = if annual_debt_service > 0.0 {
            property.net_operating_income() / annual_debt_service
        } else {
            0.0
        };

        Self {
            balloon_due_years: None,
            interest_only: false,
            dscr,
            ltv: property.ltv(),
            cash_on_cash: property.cash_on_cash(),
            cap_rate: property.cap_rate(),
        }
    }
}

/// Overall risk bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskCategory {
    /// Bucket a weighted score: Low <= 3 < Medium <= 5 < High <= 7 < VeryHigh
    pub fn from_score(score: f64) -> Self {
        if score <= 3.0 {
            RiskCategory::Low
        } else if score <= 5.0 {
            RiskCategory::Medium
        } else if score <= 7.0 {
            RiskCategory::High
        } else {
            RiskCategory::VeryHigh
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low",
            RiskCategory::Medium => "Medium",
            RiskCategory::High => "High",
            RiskCategory::VeryHigh => "Very High",
        }
    }
}

/// Shift applied to the market volatility factor (and the enhanced
/// logistic predictor) for a market regime
pub fn market_risk_shift(market_type: MarketType) -> f64 {
    match market_type {
        MarketType::Slow => 0.5,
        MarketType::Stable => 0.0,
        MarketType::Hot => -0.3,
    }
}

/// Weighted risk score result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskScore {
    /// Market factor after the regime shift
    pub market_component: f64,

    /// Financing factor after balloon / interest-only amplification
    pub financing_component: f64,

    pub property_component: f64,
    pub location_component: f64,
    pub tenant_component: f64,

    pub overall_risk_score: f64,
    pub category: RiskCategory,
    pub recommendations: Vec<String>,
}

/// Amplify the financing factor for balloon proximity and interest-only
/// structure, clamped back to the 1-10 scale
fn amplified_financing_risk(base: f64, loan: Option<&LoanProfile>) -> f64 {
    let mut score = base;

    if let Some(loan) = loan {
        if let Some(years) = loan.balloon_due_years {
            if years <= 1.0 {
                score += 2.0;
            } else if years <= 3.0 {
                score += 1.0;
            }
        }
        if loan.interest_only {
            score += 1.0;
        }
    }

    score.clamp(1.0, 10.0)
}

/// Compute the weighted risk score for a property
pub fn calculate_risk_score(
    factors: &RiskFactors,
    market: &MarketConditions,
    loan: Option<&LoanProfile>,
) -> RiskScore {
    let weights = RiskWeights::default();

    let market_component =
        (factors.market_volatility + market_risk_shift(market.market_type)).clamp(1.0, 10.0);
    let financing_component = amplified_financing_risk(factors.financing_risk, loan);

    let overall_risk_score = market_component * weights.market
        + financing_component * weights.financing
        + factors.property_condition * weights.property
        + factors.location_stability * weights.location
        + factors.tenant_quality * weights.tenant;

    let category = RiskCategory::from_score(overall_risk_score);

    let mut recommendations = Vec::new();
    if financing_component > 6.0 {
        recommendations.push(
            "Financing risk is elevated; consider fixed-rate or longer-term debt".to_string(),
        );
    }
    if let Some(loan) = loan {
        if matches!(loan.balloon_due_years, Some(y) if y <= 3.0) {
            recommendations
                .push("Balloon payment due within 3 years; line up takeout financing".to_string());
        }
    }
    if market_component > 6.0 {
        recommendations.push(
            "Market volatility is high; underwrite with conservative rent growth".to_string(),
        );
    }
    if factors.property_condition > 6.0 {
        recommendations
            .push("Property condition risk is high; budget a capital expenditure reserve".to_string());
    }
    if factors.tenant_quality > 6.0 {
        recommendations.push("Tighten tenant screening and require larger deposits".to_string());
    }
    if factors.location_stability > 6.0 {
        recommendations
            .push("Location stability is weak; diversify holdings across submarkets".to_string());
    }
    if category == RiskCategory::VeryHigh {
        recommendations.push(
            "Overall risk is very high; this investment needs a substantial margin of safety"
                .to_string(),
        );
    }

    RiskScore {
        market_component,
        financing_component,
        property_component: factors.property_condition,
        location_component: factors.location_stability,
        tenant_component: factors.tenant_quality,
        overall_risk_score,
        category,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_factors_score_medium() {
        let factors = default_risk_factors();
        let result = calculate_risk_score(&factors, &MarketConditions::stable(), None);

        assert!((result.overall_risk_score - 5.0).abs() < 1e-9);
        assert!(result.overall_risk_score > 3.0 && result.overall_risk_score <= 5.0);
        assert_eq!(result.category, RiskCategory::Medium);
    }

    #[test]
    fn test_category_buckets() {
        assert_eq!(RiskCategory::from_score(2.9), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(3.0), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(3.1), RiskCategory::Medium);
        assert_eq!(RiskCategory::from_score(5.0), RiskCategory::Medium);
        assert_eq!(RiskCategory::from_score(6.8), RiskCategory::High);
        assert_eq!(RiskCategory::from_score(7.1), RiskCategory::VeryHigh);
    }

    #[test]
    fn test_interest_only_amplifies_financing() {
        let factors = default_risk_factors();
        let market = MarketConditions::stable();

        let loan = LoanProfile {
            balloon_due_years: None,
            interest_only: true,
            dscr: 1.3,
            ltv: 0.7,
            cash_on_cash: 0.06,
            cap_rate: 0.05,
        };

        let without = calculate_risk_score(&factors, &market, None);
        let with = calculate_risk_score(&factors, &market, Some(&loan));

        assert!((with.financing_component - 6.0).abs() < 1e-9);
        assert!(with.overall_risk_score > without.overall_risk_score);
    }

    #[test]
    fn test_balloon_proximity_amplification() {
        let factors = default_risk_factors();
        let market = MarketConditions::stable();

        let near = LoanProfile {
            balloon_due_years: Some(0.5),
            interest_only: false,
            dscr: 1.3,
            ltv: 0.7,
            cash_on_cash: 0.06,
            cap_rate: 0.05,
        };
        let far = LoanProfile {
            balloon_due_years: Some(7.0),
            ..near.clone()
        };

        let near_score = calculate_risk_score(&factors, &market, Some(&near));
        let far_score = calculate_risk_score(&factors, &market, Some(&far));

        assert!((near_score.financing_component - 7.0).abs() < 1e-9);
        assert!((far_score.financing_component - 5.0).abs() < 1e-9);
        assert!(near_score
            .recommendations
            .iter()
            .any(|r| r.contains("Balloon")));
    }

    #[test]
    fn test_financing_clamped_at_ten() {
        let mut factors = default_risk_factors();
        factors.financing_risk = 9.5;

        let loan = LoanProfile {
            balloon_due_years: Some(0.5),
            interest_only: true,
            dscr: 0.9,
            ltv: 0.9,
            cash_on_cash: -0.01,
            cap_rate: 0.03,
        };

        let result = calculate_risk_score(&factors, &MarketConditions::stable(), Some(&loan));
        assert_eq!(result.financing_component, 10.0);
    }

    #[test]
    fn test_market_regime_shifts_score() {
        let factors = default_risk_factors();

        let hot = calculate_risk_score(&factors, &MarketConditions::hot(), None);
        let stable = calculate_risk_score(&factors, &MarketConditions::stable(), None);
        let slow = calculate_risk_score(&factors, &MarketConditions::slow(), None);

        assert!(hot.overall_risk_score < stable.overall_risk_score);
        assert!(slow.overall_risk_score > stable.overall_risk_score);
    }

    #[test]
    fn test_loan_profile_from_financials() {
        let property = PropertyFinancials::new(
            350_000.0,
            300_000.0,
            2_500.0,
            1_500.0,
            240_000.0,
            0.065,
            360,
            70_000.0,
        );

        let loan = LoanProfile::from_financials(&property);

        // NOI 10500 / debt service (1516.96 * 12 = 18203.55) = 0.577
        assert!((loan.dscr - 0.5768).abs() < 0.001);
        assert!(!loan.interest_only);
        assert!(loan.balloon_due_years.is_none());
    }
}
