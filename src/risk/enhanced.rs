//! Enhanced risk scoring with metric adjustments and probability of loss
//!
//! Extends the weighted score with bucketed adjustments from the four
//! financing metrics (DSCR, LTV, cash-on-cash, cap rate), then estimates
//! a probability of loss with a hand-calibrated logistic model:
//! `z = b0 + sum(b_i * factor_i)`, `P = 1 / (1 + e^-z)`.

use super::score::{
    calculate_risk_score, market_risk_shift, LoanProfile, RiskCategory, RiskFactors, RiskScore,
};
use crate::factors::MarketConditions;
use serde::{Deserialize, Serialize};

/// One metric's contribution to the adjusted score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricAdjustment {
    /// Metric name ("DSCR", "LTV", "CashOnCash", "CapRate")
    pub metric: String,

    /// Named risk level for the metric's bucket
    pub level: String,

    /// Observed metric value
    pub value: f64,

    /// Signed score adjustment
    pub adjustment: f64,
}

/// Bucket a debt service coverage ratio
pub fn dscr_adjustment(dscr: f64) -> MetricAdjustment {
    let (level, adjustment) = if dscr > 2.0 {
        ("Very Strong", -0.5)
    } else if dscr >= 1.5 {
        ("Strong", -0.25)
    } else if dscr >= 1.25 {
        ("Adequate", 0.0)
    } else if dscr >= 1.1 {
        ("Thin", 0.5)
    } else if dscr >= 1.0 {
        ("Marginal", 1.0)
    } else {
        ("Negative Coverage", 2.0)
    };

    MetricAdjustment {
        metric: "DSCR".to_string(),
        level: level.to_string(),
        value: dscr,
        adjustment,
    }
}

/// Bucket a loan-to-value ratio
pub fn ltv_adjustment(ltv: f64) -> MetricAdjustment {
    let (level, adjustment) = if ltv < 0.5 {
        ("Conservative", -0.5)
    } else if ltv < 0.65 {
        ("Moderate", -0.25)
    } else if ltv < 0.75 {
        ("Standard", 0.0)
    } else if ltv < 0.85 {
        ("Elevated", 0.5)
    } else if ltv < 0.95 {
        ("High", 1.0)
    } else {
        ("Extreme", 1.5)
    };

    MetricAdjustment {
        metric: "LTV".to_string(),
        level: level.to_string(),
        value: ltv,
        adjustment,
    }
}

/// Bucket a cash-on-cash return
pub fn cash_on_cash_adjustment(cash_on_cash: f64) -> MetricAdjustment {
    let (level, adjustment) = if cash_on_cash >= 0.12 {
        ("Excellent", -0.5)
    } else if cash_on_cash >= 0.08 {
        ("Good", -0.25)
    } else if cash_on_cash >= 0.05 {
        ("Fair", 0.0)
    } else if cash_on_cash >= 0.02 {
        ("Weak", 0.5)
    } else if cash_on_cash >= 0.0 {
        ("Minimal", 0.75)
    } else {
        ("Negative", 1.5)
    };

    MetricAdjustment {
        metric: "CashOnCash".to_string(),
        level: level.to_string(),
        value: cash_on_cash,
        adjustment,
    }
}

/// Bucket a capitalization rate
pub fn cap_rate_adjustment(cap_rate: f64) -> MetricAdjustment {
    let (level, adjustment) = if cap_rate >= 0.08 {
        ("High Yield", -0.5)
    } else if cap_rate >= 0.06 {
        ("Solid", -0.25)
    } else if cap_rate >= 0.045 {
        ("Market", 0.0)
    } else if cap_rate >= 0.03 {
        ("Compressed", 0.5)
    } else {
        ("Speculative", 1.0)
    };

    MetricAdjustment {
        metric: "CapRate".to_string(),
        level: level.to_string(),
        value: cap_rate,
        adjustment,
    }
}

/// Calibrated coefficients for the probability-of-loss logistic model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticCoefficients {
    pub intercept: f64,
    pub overall_score: f64,
    pub dscr: f64,
    pub ltv: f64,
    pub cash_on_cash: f64,
    pub cap_rate: f64,
}

impl Default for LogisticCoefficients {
    fn default() -> Self {
        Self {
            intercept: -6.5,
            overall_score: 0.8,
            dscr: 0.7,
            ltv: 0.6,
            cash_on_cash: 0.4,
            cap_rate: 0.3,
        }
    }
}

/// Enhanced risk score result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedRiskScore {
    /// Underlying weighted score
    pub base: RiskScore,

    pub metric_adjustments: Vec<MetricAdjustment>,
    pub total_adjustment: f64,

    /// Base score plus adjustments, clamped to [1, 10]
    pub adjusted_score: f64,

    /// Estimated probability of a loss-making outcome, in (0, 1)
    pub probability_of_loss: f64,

    /// Category derived jointly from score and probability of loss
    pub category: RiskCategory,
}

/// Derive the category from the adjusted score AND the probability of
/// loss jointly; a high loss probability pushes the bucket up even when
/// the score alone would read lower
pub fn get_risk_category(adjusted_score: f64, probability_of_loss: f64) -> RiskCategory {
    if adjusted_score <= 3.0 && probability_of_loss < 0.10 {
        RiskCategory::Low
    } else if adjusted_score <= 5.0 && probability_of_loss < 0.25 {
        RiskCategory::Medium
    } else if adjusted_score <= 7.0 && probability_of_loss < 0.50 {
        RiskCategory::High
    } else {
        RiskCategory::VeryHigh
    }
}

/// Compute the enhanced risk score for a property
pub fn calculate_enhanced_risk_score(
    factors: &RiskFactors,
    market: &MarketConditions,
    loan: &LoanProfile,
) -> EnhancedRiskScore {
    let base = calculate_risk_score(factors, market, Some(loan));

    let metric_adjustments = vec![
        dscr_adjustment(loan.dscr),
        ltv_adjustment(loan.ltv),
        cash_on_cash_adjustment(loan.cash_on_cash),
        cap_rate_adjustment(loan.cap_rate),
    ];
    let total_adjustment: f64 = metric_adjustments.iter().map(|a| a.adjustment).sum();

    let adjusted_score = (base.overall_risk_score + total_adjustment).clamp(1.0, 10.0);

    let c = LogisticCoefficients::default();
    let z = c.intercept
        + c.overall_score * adjusted_score
        + c.dscr * metric_adjustments[0].adjustment
        + c.ltv * metric_adjustments[1].adjustment
        + c.cash_on_cash * metric_adjustments[2].adjustment
        + c.cap_rate * metric_adjustments[3].adjustment
        + market_risk_shift(market.market_type);
    let probability_of_loss = 1.0 / (1.0 + (-z).exp());

    let category = get_risk_category(adjusted_score, probability_of_loss);

    EnhancedRiskScore {
        base,
        metric_adjustments,
        total_adjustment,
        adjusted_score,
        probability_of_loss,
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::default_risk_factors;

    fn solid_loan() -> LoanProfile {
        LoanProfile {
            balloon_due_years: None,
            interest_only: false,
            dscr: 1.4,
            ltv: 0.7,
            cash_on_cash: 0.06,
            cap_rate: 0.05,
        }
    }

    #[test]
    fn test_neutral_metrics_leave_score_unchanged() {
        let factors = default_risk_factors();
        let result =
            calculate_enhanced_risk_score(&factors, &MarketConditions::stable(), &solid_loan());

        assert_eq!(result.total_adjustment, 0.0);
        assert!((result.adjusted_score - result.base.overall_risk_score).abs() < 1e-9);
        assert_eq!(result.category, RiskCategory::Medium);
    }

    #[test]
    fn test_dscr_buckets() {
        assert_eq!(dscr_adjustment(2.5).adjustment, -0.5);
        assert_eq!(dscr_adjustment(1.7).level, "Strong");
        assert_eq!(dscr_adjustment(1.3).adjustment, 0.0);
        assert_eq!(dscr_adjustment(1.15).adjustment, 0.5);
        assert_eq!(dscr_adjustment(1.05).adjustment, 1.0);
        assert_eq!(dscr_adjustment(0.9).adjustment, 2.0);
        assert_eq!(dscr_adjustment(0.9).level, "Negative Coverage");
    }

    #[test]
    fn test_weak_metrics_raise_probability() {
        let factors = default_risk_factors();
        let market = MarketConditions::stable();

        let weak = LoanProfile {
            balloon_due_years: None,
            interest_only: false,
            dscr: 0.95,
            ltv: 0.92,
            cash_on_cash: -0.02,
            cap_rate: 0.025,
        };

        let strong = calculate_enhanced_risk_score(&factors, &market, &solid_loan());
        let weak = calculate_enhanced_risk_score(&factors, &market, &weak);

        assert!(weak.total_adjustment > 4.0);
        assert!(weak.adjusted_score > strong.adjusted_score);
        assert!(weak.probability_of_loss > strong.probability_of_loss);
        assert_eq!(weak.category, RiskCategory::VeryHigh);
    }

    #[test]
    fn test_adjusted_score_clamped() {
        let mut factors = default_risk_factors();
        factors.market_volatility = 9.0;
        factors.financing_risk = 9.0;
        factors.property_condition = 9.0;
        factors.location_stability = 9.0;
        factors.tenant_quality = 9.0;

        let weak = LoanProfile {
            balloon_due_years: Some(0.5),
            interest_only: true,
            dscr: 0.8,
            ltv: 1.0,
            cash_on_cash: -0.05,
            cap_rate: 0.02,
        };

        let result = calculate_enhanced_risk_score(&factors, &MarketConditions::slow(), &weak);
        assert_eq!(result.adjusted_score, 10.0);
    }

    #[test]
    fn test_probability_in_unit_interval() {
        let factors = default_risk_factors();
        for market in [
            MarketConditions::hot(),
            MarketConditions::stable(),
            MarketConditions::slow(),
        ] {
            let result = calculate_enhanced_risk_score(&factors, &market, &solid_loan());
            assert!(result.probability_of_loss > 0.0 && result.probability_of_loss < 1.0);
        }
    }

    #[test]
    fn test_joint_category_probability_overrides_score() {
        // Same low score: the high loss probability pushes the bucket up
        assert_eq!(get_risk_category(2.5, 0.05), RiskCategory::Low);
        assert_ne!(get_risk_category(2.5, 0.40), RiskCategory::Low);
    }

    #[test]
    fn test_hot_market_lowers_probability() {
        let factors = default_risk_factors();
        let loan = solid_loan();

        let hot = calculate_enhanced_risk_score(&factors, &MarketConditions::hot(), &loan);
        let slow = calculate_enhanced_risk_score(&factors, &MarketConditions::slow(), &loan);

        assert!(hot.probability_of_loss < slow.probability_of_loss);
    }
}
