mod jurisdiction;
mod tax_breakdown;

pub use jurisdiction::{all_rates, lookup, Jurisdiction, JurisdictionRate};
pub use tax_breakdown::TaxBreakdown;
