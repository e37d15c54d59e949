use rust_decimal::{Decimal, MathematicalOps};
use tracing::{debug, info};

use crate::core::money::{self, round_money};
use crate::core::Result;
use crate::modules::financing::models::{
    validate_interest_rate, validate_term, AmortizationEntry, FinancingSummary, FinancingTerms,
    PaymentFrequency,
};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Calculator for loan payments and amortization schedules
pub struct FinancingCalculator;

impl FinancingCalculator {
    /// Calculate the payment summary for a loan
    ///
    /// The monthly payment uses the standard annuity formula. Bi-weekly and
    /// weekly payments annualize the monthly payment and spread it over 26 or
    /// 52 payments; they are not a separate amortization.
    ///
    /// A zero interest rate divides the loan evenly over the term.
    pub fn calculate_financing(terms: &FinancingTerms) -> Result<FinancingSummary> {
        terms.validate()?;

        let loan_amount = money::sub(terms.principal, terms.down_payment, "loan amount")?;
        let monthly_rate = Self::monthly_rate(terms.interest_rate)?;
        let monthly_payment = Self::monthly_payment(loan_amount, monthly_rate, terms.term_months)?;

        let (total_payments, total_interest) = if monthly_rate.is_zero() {
            (loan_amount, Decimal::ZERO)
        } else {
            let total_payments = money::mul(
                monthly_payment,
                Decimal::from(terms.term_months),
                "total payments",
            )?;
            (
                total_payments,
                money::sub(total_payments, loan_amount, "total interest")?,
            )
        };

        let payment = Self::periodic_payment(monthly_payment, terms.frequency)?;

        debug!(
            loan_amount = %loan_amount,
            interest_rate = %terms.interest_rate,
            term_months = terms.term_months,
            frequency = %terms.frequency,
            "Financing calculated"
        );

        Ok(FinancingSummary {
            loan_amount: round_money(loan_amount),
            monthly_payment: round_money(monthly_payment),
            payment: round_money(payment),
            frequency: terms.frequency,
            payments_per_year: terms.frequency.payments_per_year(),
            total_payments: round_money(total_payments),
            total_interest: round_money(total_interest),
            down_payment: round_money(terms.down_payment),
        })
    }

    /// Generate a month-by-month amortization schedule of exactly `term_months` rows
    ///
    /// The payment is computed once. Each month the interest on the running
    /// balance is charged first and the rest of the payment reduces the
    /// balance. The reported balance is floored at zero.
    ///
    /// A zero interest rate is amortized linearly with no interest.
    pub fn generate_amortization_schedule(
        principal: Decimal,
        interest_rate: Decimal,
        term_months: u32,
    ) -> Result<Vec<AmortizationEntry>> {
        validate_term(term_months)?;
        validate_interest_rate(interest_rate)?;

        let monthly_rate = Self::monthly_rate(interest_rate)?;
        let monthly_payment = Self::monthly_payment(principal, monthly_rate, term_months)?;

        info!(
            "Generating {} month amortization schedule (principal: {}, rate: {}%)",
            term_months, principal, interest_rate
        );

        let mut balance = principal;
        let mut schedule = Vec::with_capacity(term_months as usize);

        for month in 1..=term_months {
            let interest_payment = money::mul(balance, monthly_rate, "interest payment")?;
            let principal_payment =
                money::sub(monthly_payment, interest_payment, "principal payment")?;
            balance = money::sub(balance, principal_payment, "balance")?;

            schedule.push(AmortizationEntry {
                month,
                payment: round_money(monthly_payment),
                principal: round_money(principal_payment),
                interest: round_money(interest_payment),
                balance: round_money(balance.max(Decimal::ZERO)),
            });
        }

        Ok(schedule)
    }

    /// Annual percentage rate to monthly fraction: `rate / 100 / 12`
    pub fn monthly_rate(interest_rate: Decimal) -> Result<Decimal> {
        money::div(
            money::div(interest_rate, Decimal::ONE_HUNDRED, "monthly rate")?,
            MONTHS_PER_YEAR,
            "monthly rate",
        )
    }

    /// Unrounded monthly payment
    ///
    /// `loan × r × (1+r)^n / ((1+r)^n - 1)`, or `loan / n` when `r` is zero
    pub fn monthly_payment(loan_amount: Decimal, monthly_rate: Decimal, term_months: u32) -> Result<Decimal> {
        validate_term(term_months)?;

        if monthly_rate.is_zero() {
            return money::div(loan_amount, Decimal::from(term_months), "monthly payment");
        }

        let growth = money::checked(
            (Decimal::ONE + monthly_rate).checked_powi(i64::from(term_months)),
            "compound growth",
        )?;

        money::div(
            money::mul(money::mul(loan_amount, monthly_rate, "monthly payment")?, growth, "monthly payment")?,
            money::sub(growth, Decimal::ONE, "monthly payment")?,
            "monthly payment",
        )
    }

    /// Spread the annualized monthly payment over the chosen frequency
    fn periodic_payment(monthly_payment: Decimal, frequency: PaymentFrequency) -> Result<Decimal> {
        match frequency {
            PaymentFrequency::Monthly => Ok(monthly_payment),
            PaymentFrequency::BiWeekly | PaymentFrequency::Weekly => money::div(
                money::mul(monthly_payment, MONTHS_PER_YEAR, "periodic payment")?,
                Decimal::from(frequency.payments_per_year()),
                "periodic payment",
            ),
        }
    }
}
