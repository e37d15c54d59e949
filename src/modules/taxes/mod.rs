pub mod controllers;
pub mod models;
pub mod services;

pub use models::{lookup, Jurisdiction, JurisdictionRate, TaxBreakdown};
pub use services::TaxCalculator;
