use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::financing_terms::PaymentFrequency;

/// Payment summary for a loan. Money fields are rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingSummary {
    /// Principal minus down payment
    pub loan_amount: Decimal,
    pub monthly_payment: Decimal,
    /// Payment at the requested frequency
    pub payment: Decimal,
    pub frequency: PaymentFrequency,
    pub payments_per_year: u32,
    pub total_payments: Decimal,
    pub total_interest: Decimal,
    pub down_payment: Decimal,
}

/// One month of an amortization schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-based month number
    pub month: u32,
    pub payment: Decimal,
    pub principal: Decimal,
    pub interest: Decimal,
    /// Remaining balance after this payment, never below zero
    pub balance: Decimal,
}
