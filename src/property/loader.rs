//! Load property snapshots from a portfolio CSV

use super::{FilingStatus, InvestmentType, PropertyFinancials};
use csv::Reader;
use std::path::Path;
use thiserror::Error;

/// Default portfolio location relative to the working directory
pub const DEFAULT_PORTFOLIO_PATH: &str = "data/portfolio.csv";

/// Errors raised while reading a portfolio file
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("failed to read portfolio CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("portfolio row {row}: {message}")]
    Field { row: usize, message: String },
}

/// One property from the portfolio, with its underwriting attributes
#[derive(Debug, Clone)]
pub struct PortfolioRecord {
    pub property_id: u32,
    pub financials: PropertyFinancials,
    pub investment_type: InvestmentType,
    pub filing_status: FilingStatus,
}

/// Raw CSV row matching the portfolio.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "PropertyID")]
    property_id: u32,
    #[serde(rename = "PropertyValue")]
    property_value: f64,
    #[serde(rename = "PurchasePrice")]
    purchase_price: f64,
    #[serde(rename = "CurrentMarketValue")]
    current_market_value: f64,
    #[serde(rename = "MonthlyRent")]
    monthly_rent: f64,
    #[serde(rename = "MonthlyExpenses")]
    monthly_expenses: f64,
    #[serde(rename = "MonthlyCashFlow")]
    monthly_cash_flow: f64,
    #[serde(rename = "VacancyRate")]
    vacancy_rate: f64,
    #[serde(rename = "AnnualIncome")]
    annual_income: f64,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
    #[serde(rename = "LoanAmount")]
    loan_amount: f64,
    #[serde(rename = "LoanTermMonths")]
    loan_term_months: u32,
    #[serde(rename = "DownPayment")]
    down_payment: f64,
    #[serde(rename = "AnnualROI")]
    annual_roi: f64,
    #[serde(rename = "InvestmentType")]
    investment_type: String,
    #[serde(rename = "FilingStatus")]
    filing_status: String,
}

impl CsvRow {
    fn to_record(self, row: usize) -> Result<PortfolioRecord, PortfolioError> {
        let investment_type = match self.investment_type.as_str() {
            "Residential" => InvestmentType::Residential,
            "Commercial" => InvestmentType::Commercial,
            other => {
                return Err(PortfolioError::Field {
                    row,
                    message: format!("Unknown InvestmentType: {}", other),
                })
            }
        };

        let filing_status = match self.filing_status.as_str() {
            "Single" => FilingStatus::Single,
            "MFJ" => FilingStatus::MarriedFilingJointly,
            "MFS" => FilingStatus::MarriedFilingSeparately,
            "HoH" => FilingStatus::HeadOfHousehold,
            other => {
                return Err(PortfolioError::Field {
                    row,
                    message: format!("Unknown FilingStatus: {}", other),
                })
            }
        };

        Ok(PortfolioRecord {
            property_id: self.property_id,
            financials: PropertyFinancials {
                property_value: self.property_value,
                purchase_price: self.purchase_price,
                current_market_value: self.current_market_value,
                monthly_rent: self.monthly_rent,
                monthly_expenses: self.monthly_expenses,
                monthly_cash_flow: self.monthly_cash_flow,
                vacancy_rate: self.vacancy_rate,
                annual_income: self.annual_income,
                current_interest_rate: self.interest_rate,
                loan_amount: self.loan_amount,
                loan_term_months: self.loan_term_months,
                down_payment: self.down_payment,
                annual_roi: self.annual_roi,
            },
            investment_type,
            filing_status,
        })
    }
}

/// Load all properties from a CSV file
pub fn load_portfolio<P: AsRef<Path>>(path: P) -> Result<Vec<PortfolioRecord>, PortfolioError> {
    let mut reader = Reader::from_path(path)?;
    let mut records = Vec::new();

    for (i, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        records.push(row.to_record(i + 1)?);
    }

    log::info!("loaded {} properties from portfolio", records.len());
    Ok(records)
}

/// Load properties from any reader (e.g., string buffer, request body)
pub fn load_portfolio_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<PortfolioRecord>, PortfolioError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut records = Vec::new();

    for (i, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        records.push(row.to_record(i + 1)?);
    }

    Ok(records)
}

/// Load properties from the default portfolio.csv location
pub fn load_default_portfolio() -> Result<Vec<PortfolioRecord>, PortfolioError> {
    load_portfolio(DEFAULT_PORTFOLIO_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
PropertyID,PropertyValue,PurchasePrice,CurrentMarketValue,MonthlyRent,MonthlyExpenses,MonthlyCashFlow,VacancyRate,AnnualIncome,InterestRate,LoanAmount,LoanTermMonths,DownPayment,AnnualROI,InvestmentType,FilingStatus
1,350000,300000,330000,2500,1500,1000,0.05,30000,0.065,240000,360,70000,3.4,Residential,MFJ
2,780000,700000,760000,6200,3900,2300,0.07,74400,0.058,520000,300,180000,4.1,Commercial,Single
";

    #[test]
    fn test_load_from_reader() {
        let records = load_portfolio_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        let r1 = &records[0];
        assert_eq!(r1.property_id, 1);
        assert_eq!(r1.financials.monthly_rent, 2_500.0);
        assert_eq!(r1.investment_type, InvestmentType::Residential);
        assert_eq!(r1.filing_status, FilingStatus::MarriedFilingJointly);

        let r2 = &records[1];
        assert_eq!(r2.investment_type, InvestmentType::Commercial);
        assert_eq!(r2.financials.loan_term_months, 300);
    }

    #[test]
    fn test_unknown_investment_type() {
        let bad = SAMPLE.replace("Commercial", "Industrial");
        let err = load_portfolio_from_reader(bad.as_bytes()).unwrap_err();
        match err {
            PortfolioError::Field { row, message } => {
                assert_eq!(row, 2);
                assert!(message.contains("Industrial"));
            }
            other => panic!("expected field error, got {:?}", other),
        }
    }
}
