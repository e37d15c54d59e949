//! Shared money arithmetic.
//!
//! Every figure the calculators report goes through [`round_money`] exactly
//! once, at the point where it is emitted. Intermediate values stay unrounded.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{AppError, Result};

/// Number of decimal places for every reported money figure and percentage
pub const MONEY_SCALE: u32 = 2;

/// Round a value to cents, half away from zero.
///
/// For non-negative values this matches "multiply by 100, round to the
/// nearest integer, divide by 100". Negative values round symmetrically.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Render a fractional rate as a percentage with two decimals, e.g. `0.13` -> `"13.00"`
pub fn format_percent(rate: Decimal) -> String {
    let percent = round_money(rate * Decimal::ONE_HUNDRED);
    format!("{:.2}", percent)
}

/// Turn the result of a checked Decimal operation into a calculator error
pub fn checked(value: Option<Decimal>, context: &str) -> Result<Decimal> {
    value.ok_or_else(|| AppError::arithmetic(format!("{} is out of range", context)))
}

pub fn add(a: Decimal, b: Decimal, context: &str) -> Result<Decimal> {
    checked(a.checked_add(b), context)
}

pub fn sub(a: Decimal, b: Decimal, context: &str) -> Result<Decimal> {
    checked(a.checked_sub(b), context)
}

pub fn mul(a: Decimal, b: Decimal, context: &str) -> Result<Decimal> {
    checked(a.checked_mul(b), context)
}

/// Checked division; a zero divisor is reported as an arithmetic error
pub fn div(a: Decimal, b: Decimal, context: &str) -> Result<Decimal> {
    if b.is_zero() {
        return Err(AppError::arithmetic(format!("{} divides by zero", context)));
    }
    checked(a.checked_div(b), context)
}
