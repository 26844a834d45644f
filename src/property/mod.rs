//! Property snapshot structures and portfolio loading

mod data;
pub mod loader;
pub mod validate;

pub use data::{FilingStatus, InvestmentType, PropertyFinancials};
pub use loader::{
    load_default_portfolio, load_portfolio, load_portfolio_from_reader, PortfolioRecord,
};
pub use validate::{validate, ValidationError};
