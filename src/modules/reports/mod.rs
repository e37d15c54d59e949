pub mod controllers;
pub mod models;
pub mod services;

pub use models::{FinancialLedger, InventorySummary};
pub use services::ReportService;
