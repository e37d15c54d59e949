pub mod controllers;
pub mod models;
pub mod services;

pub use models::{
    AmortizationEntry, FinancingSummary, FinancingTerms, PaymentFrequency, MAX_TERM_MONTHS,
};
pub use services::FinancingCalculator;
