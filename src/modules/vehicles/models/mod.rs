mod vehicle;
mod vehicle_profit;

pub use vehicle::{Vehicle, VehicleStatus};
pub use vehicle_profit::{VehicleProfit, VehicleProfitRequest};
