use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a vehicle in inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleStatus {
    Active,
    Inactive,
    Sold,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
}

impl VehicleStatus {
    /// Every status, in reporting order
    pub const ALL: [VehicleStatus; 4] = [
        VehicleStatus::Active,
        VehicleStatus::Sold,
        VehicleStatus::Inactive,
        VehicleStatus::ComingSoon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Sold => "Sold",
            Self::ComingSoon => "Coming Soon",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inventory record for a vehicle, as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    #[serde(default)]
    pub vin: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub purchase_price: Decimal,
    #[serde(default)]
    pub retail_price: Decimal,
    #[serde(default)]
    pub extra_costs: Decimal,
    pub status: VehicleStatus,
    /// When the vehicle was acquired
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    /// Last six characters of the VIN, if there is one
    pub fn short_vin(&self) -> Option<&str> {
        self.vin.as_deref().filter(|vin| !vin.is_empty()).map(|vin| {
            let start = vin
                .char_indices()
                .rev()
                .nth(5)
                .map(|(i, _)| i)
                .unwrap_or(0);
            &vin[start..]
        })
    }

    /// `<year> <make> <model>`, omitting an unknown year
    pub fn title(&self) -> String {
        match self.year {
            Some(year) => format!("{} {} {}", year, self.make, self.model),
            None => format!("{} {}", self.make, self.model),
        }
    }
}
