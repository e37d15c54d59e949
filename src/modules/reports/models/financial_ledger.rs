use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Most recent entries kept in a ledger
pub const LEDGER_LIMIT: usize = 50;

/// A completed sale, as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub vehicle_id: Option<String>,
}

/// Money in or money out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerEntryType {
    Sale,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub entry_type: LedgerEntryType,
    pub description: String,
    pub amount: Decimal,
}

/// Sales and vehicle purchases, most recent first, with totals over the kept entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialLedger {
    pub entries: Vec<LedgerEntry>,
    pub total_revenue: Decimal,
    pub total_expenses: Decimal,
    /// Revenue minus expenses
    pub net: Decimal,
}

impl FinancialLedger {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
