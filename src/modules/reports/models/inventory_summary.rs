use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::vehicles::models::VehicleStatus;

/// Dashboard figures for the vehicles currently on the lot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    /// Number of active vehicles
    pub total_inventory_count: usize,
    /// Sum of active vehicles' purchase prices
    pub total_inventory_value: Decimal,
    /// Sum of `retail - purchase - extra costs` over active vehicles
    pub projected_profit: Decimal,
    /// Vehicle count per status, every status included
    pub status_counts: Vec<StatusCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: VehicleStatus,
    pub count: usize,
}

impl InventorySummary {
    /// Count for one status
    pub fn count_for(&self, status: VehicleStatus) -> usize {
        self.status_counts
            .iter()
            .find(|entry| entry.status == status)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}
