use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Longest accepted loan term (50 years)
pub const MAX_TERM_MONTHS: u32 = 600;

/// How often the borrower pays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentFrequency {
    #[default]
    Monthly,
    BiWeekly,
    Weekly,
}

impl PaymentFrequency {
    pub fn payments_per_year(&self) -> u32 {
        match self {
            Self::Monthly => 12,
            Self::BiWeekly => 26,
            Self::Weekly => 52,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::BiWeekly => "bi-weekly",
            Self::Weekly => "weekly",
        }
    }
}

impl std::fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Loan terms for a financing quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancingTerms {
    /// Vehicle price being financed
    pub principal: Decimal,
    /// Annual interest rate in percent (5.99 = 5.99%)
    pub interest_rate: Decimal,
    /// Loan term in months
    pub term_months: u32,
    #[serde(default)]
    pub down_payment: Decimal,
    #[serde(default)]
    pub frequency: PaymentFrequency,
}

impl FinancingTerms {
    pub fn new(principal: Decimal, interest_rate: Decimal, term_months: u32) -> Self {
        Self {
            principal,
            interest_rate,
            term_months,
            down_payment: Decimal::ZERO,
            frequency: PaymentFrequency::Monthly,
        }
    }

    pub fn with_down_payment(mut self, down_payment: Decimal) -> Self {
        self.down_payment = down_payment;
        self
    }

    pub fn with_frequency(mut self, frequency: PaymentFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Validate loan terms
    pub fn validate(&self) -> Result<()> {
        validate_term(self.term_months)?;
        validate_interest_rate(self.interest_rate)
    }
}

/// Request body for POST /financing/schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub principal: Decimal,
    pub interest_rate: Decimal,
    pub term_months: u32,
}

/// The term must cover between one and [`MAX_TERM_MONTHS`] months
pub(crate) fn validate_term(term_months: u32) -> Result<()> {
    if term_months == 0 {
        return Err(AppError::validation("Loan term must be at least 1 month"));
    }
    if term_months > MAX_TERM_MONTHS {
        return Err(AppError::validation(format!(
            "Loan term cannot exceed {} months, got {}",
            MAX_TERM_MONTHS, term_months
        )));
    }
    Ok(())
}

pub(crate) fn validate_interest_rate(interest_rate: Decimal) -> Result<()> {
    if interest_rate < Decimal::ZERO {
        return Err(AppError::validation(format!(
            "Interest rate cannot be negative, got {}",
            interest_rate
        )));
    }
    Ok(())
}
