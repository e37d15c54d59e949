pub mod controllers;
pub mod models;
pub mod services;

pub use models::{Vehicle, VehicleProfit, VehicleStatus};
pub use services::ProfitCalculator;
