//! Underwriting System - Financial analysis engine for real-estate investments
//!
//! This library provides:
//! - Market, seasonal, property-age and location adjustment calculators
//! - Exit strategy and refinance scenario analysis
//! - Rental tax implications (flat-bracket and IRS-rule-aware)
//! - Weighted risk scoring with logistic probability of loss
//! - Multi-scenario stress testing
//! - Portfolio loading and batch underwriting

pub mod analysis;
pub mod factors;
pub mod property;
pub mod risk;
pub mod scenario;
pub mod stress;

// Re-export commonly used types
pub use factors::{Factors, MarketConditions};
pub use property::{PortfolioRecord, PropertyFinancials};
pub use risk::{EnhancedRiskScore, LoanProfile, RiskCategory, RiskFactors};
pub use scenario::{UnderwritingConfig, UnderwritingResult, UnderwritingRunner};
pub use stress::{ComprehensiveStressTestResult, RiskLevel, StressScenarios};
