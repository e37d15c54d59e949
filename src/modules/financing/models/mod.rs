mod financing_summary;
mod financing_terms;

pub use financing_summary::{AmortizationEntry, FinancingSummary};
pub(crate) use financing_terms::{validate_interest_rate, validate_term};
pub use financing_terms::{FinancingTerms, PaymentFrequency, ScheduleRequest, MAX_TERM_MONTHS};
