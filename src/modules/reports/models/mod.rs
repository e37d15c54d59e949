mod financial_ledger;
mod inventory_summary;

pub use financial_ledger::{FinancialLedger, LedgerEntry, LedgerEntryType, Sale, LEDGER_LIMIT};
pub use inventory_summary::{InventorySummary, StatusCount};
