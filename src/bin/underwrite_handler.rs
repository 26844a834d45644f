//! AWS Lambda handler for running underwriting analysis
//!
//! Accepts a property snapshot via JSON and returns the full
//! underwriting result: risk score, stress test, exit strategies,
//! sensitivity rows and factor adjustments.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};
use underwriting_system::property::validate;
use underwriting_system::{
    Factors, MarketConditions, PropertyFinancials, UnderwritingConfig, UnderwritingResult,
    UnderwritingRunner,
};

/// Input for the underwriting run
#[derive(Debug, Deserialize)]
pub struct UnderwritingRequest {
    #[serde(default = "default_property_value")]
    pub property_value: f64,

    #[serde(default = "default_purchase_price")]
    pub purchase_price: f64,

    #[serde(default = "default_monthly_rent")]
    pub monthly_rent: f64,

    #[serde(default = "default_monthly_expenses")]
    pub monthly_expenses: f64,

    #[serde(default = "default_loan_amount")]
    pub loan_amount: f64,

    /// Annual note rate fraction (default: 6.5%)
    #[serde(default = "default_interest_rate")]
    pub interest_rate: f64,

    #[serde(default = "default_loan_term_months")]
    pub loan_term_months: u32,

    #[serde(default = "default_down_payment")]
    pub down_payment: f64,

    /// Market regime: "hot", "stable" or "slow"
    #[serde(default = "default_market")]
    pub market: String,

    /// Calendar month for seasonal adjustments
    #[serde(default = "default_month")]
    pub month: u32,

    /// Reject out-of-domain inputs instead of computing through them
    #[serde(default)]
    pub validate_inputs: bool,
}

fn default_property_value() -> f64 { 350_000.0 }
fn default_purchase_price() -> f64 { 300_000.0 }
fn default_monthly_rent() -> f64 { 2_500.0 }
fn default_monthly_expenses() -> f64 { 1_500.0 }
fn default_loan_amount() -> f64 { 240_000.0 }
fn default_interest_rate() -> f64 { 0.065 }
fn default_loan_term_months() -> u32 { 360 }
fn default_down_payment() -> f64 { 70_000.0 }
fn default_market() -> String { "stable".to_string() }
fn default_month() -> u32 { 6 }

/// Output from the underwriting run
#[derive(Debug, Serialize)]
pub struct UnderwritingResponse {
    pub market: String,
    pub month: u32,
    pub monthly_cash_flow: f64,
    pub result: UnderwritingResult,
    pub execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &UnderwritingResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: UnderwritingRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let market = match request.market.as_str() {
        "hot" => MarketConditions::hot(),
        "stable" => MarketConditions::stable(),
        "slow" => MarketConditions::slow(),
        other => {
            return Ok(error_response(400, &format!("Unknown market regime: {}", other)));
        }
    };

    let property = PropertyFinancials::new(
        request.property_value,
        request.purchase_price,
        request.monthly_rent,
        request.monthly_expenses,
        request.loan_amount,
        request.interest_rate,
        request.loan_term_months,
        request.down_payment,
    );

    if request.validate_inputs {
        if let Err(e) = validate(&property) {
            return Ok(error_response(422, &e.to_string()));
        }
    }

    let config = UnderwritingConfig {
        month: request.month,
        ..UnderwritingConfig::default()
    };

    let runner = UnderwritingRunner::with_factors(Factors::for_market(market));
    let result = runner.run(&property, &config);

    let response = UnderwritingResponse {
        market: request.market,
        month: request.month,
        monthly_cash_flow: property.monthly_cash_flow,
        result,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
