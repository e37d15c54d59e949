use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::money::{self, format_percent, round_money};
use crate::core::Result;
use crate::modules::taxes::models::{Jurisdiction, JurisdictionRate, TaxBreakdown};

/// TaxCalculator applies a jurisdiction's sales tax regime to a pre-tax subtotal
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate the tax breakdown for a subtotal
    ///
    /// HST jurisdictions charge `subtotal × hst_rate` only. All others charge
    /// `subtotal × gst_rate` plus `subtotal × pst_rate` (PST may be zero).
    ///
    /// Negative subtotals are taxed as given, producing negative tax figures.
    /// All raw values are computed first; each reported field is then rounded
    /// exactly once.
    pub fn calculate_tax(
        &self,
        subtotal: Decimal,
        jurisdiction: Jurisdiction,
    ) -> Result<TaxBreakdown> {
        let rates = jurisdiction.rates()?;

        let (gst, pst, hst) = if rates.uses_hst() {
            (
                Decimal::ZERO,
                Decimal::ZERO,
                money::mul(subtotal, rates.hst_rate, "HST")?,
            )
        } else {
            (
                money::mul(subtotal, rates.gst_rate, "GST")?,
                money::mul(subtotal, rates.pst_rate, "PST")?,
                Decimal::ZERO,
            )
        };

        let tax_amount = money::add(money::add(gst, pst, "tax amount")?, hst, "tax amount")?;
        let grand_total = money::add(subtotal, tax_amount, "grand total")?;

        if subtotal < Decimal::ZERO {
            warn!(
                jurisdiction = %jurisdiction,
                subtotal = %subtotal,
                "Calculating tax on a negative subtotal"
            );
        }

        debug!(
            jurisdiction = %jurisdiction,
            subtotal = %subtotal,
            tax_amount = %tax_amount,
            "Tax calculated"
        );

        Ok(TaxBreakdown {
            subtotal: round_money(subtotal),
            gst: round_money(gst),
            pst: round_money(pst),
            hst: round_money(hst),
            tax_amount: round_money(tax_amount),
            grand_total: round_money(grand_total),
            jurisdiction,
            tax_breakdown_label: Self::breakdown_label(rates),
        })
    }

    /// Describe which regime applies, e.g. "GST 5.00% + PST 7.00%"
    pub fn breakdown_label(rates: &JurisdictionRate) -> String {
        if rates.uses_hst() {
            format!("HST {}%", format_percent(rates.hst_rate))
        } else if rates.pst_rate > Decimal::ZERO {
            format!(
                "GST {}% + PST {}%",
                format_percent(rates.gst_rate),
                format_percent(rates.pst_rate)
            )
        } else {
            format!("GST {}%", format_percent(rates.gst_rate))
        }
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
