use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for POST /vehicles/profit
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleProfitRequest {
    /// What the dealership paid for the vehicle
    pub purchase_price: Decimal,
    /// Asking price
    pub retail_price: Decimal,
    /// Reconditioning, transport and similar costs
    #[serde(default)]
    pub extra_costs: Decimal,
    /// Taxes paid when the vehicle was acquired
    #[serde(default)]
    pub taxes_on_purchase: Decimal,
}

/// Profit figures for one vehicle, rounded to cents.
/// `profit_margin` is a percentage of the retail price (18.00 = 18%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleProfit {
    pub total_cost: Decimal,
    pub gross_profit: Decimal,
    pub profit_margin: Decimal,
    pub retail_price: Decimal,
}
