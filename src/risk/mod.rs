//! Risk scoring: weighted factor model and logistic probability of loss

mod enhanced;
mod score;

pub use enhanced::{
    calculate_enhanced_risk_score, cap_rate_adjustment, cash_on_cash_adjustment, dscr_adjustment,
    get_risk_category, ltv_adjustment, EnhancedRiskScore, LogisticCoefficients, MetricAdjustment,
};
pub use score::{
    calculate_risk_score, default_risk_factors, market_risk_shift, LoanProfile, RiskCategory,
    RiskFactors, RiskScore, RiskWeights,
};
