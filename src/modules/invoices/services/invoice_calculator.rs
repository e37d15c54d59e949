use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::{self, round_money};
use crate::core::Result;
use crate::modules::invoices::models::{InvoiceCalculation, LineItem};
use crate::modules::taxes::models::Jurisdiction;
use crate::modules::taxes::services::TaxCalculator;

/// Composes base amount, line items and discount into a taxed invoice total
pub struct InvoiceCalculator {
    tax_calculator: TaxCalculator,
}

impl InvoiceCalculator {
    pub fn new() -> Self {
        Self {
            tax_calculator: TaxCalculator::new(),
        }
    }

    /// Calculate invoice totals
    ///
    /// `subtotal = base_amount + Σ(quantity × unit_price) - discount`
    ///
    /// The discount reduces the taxable base. A discount larger than the
    /// pre-discount amount yields a negative subtotal, taxed as-is.
    ///
    /// # Arguments
    /// * `base_amount` - Vehicle or package price before line items
    /// * `line_items` - Additional items (may be empty)
    /// * `discount` - Flat discount subtracted before tax
    /// * `jurisdiction` - Province or territory whose regime applies
    pub fn calculate_invoice_total(
        &self,
        base_amount: Decimal,
        line_items: &[LineItem],
        discount: Decimal,
        jurisdiction: Jurisdiction,
    ) -> Result<InvoiceCalculation> {
        let line_items_total = Self::line_items_total(line_items)?;

        let subtotal = money::sub(
            money::add(base_amount, line_items_total, "invoice subtotal")?,
            discount,
            "invoice subtotal",
        )?;

        debug!(
            jurisdiction = %jurisdiction,
            line_items = line_items.len(),
            subtotal = %subtotal,
            "Calculating invoice total"
        );

        let tax = self.tax_calculator.calculate_tax(subtotal, jurisdiction)?;

        Ok(InvoiceCalculation {
            base_amount: round_money(base_amount),
            line_items_total: round_money(line_items_total),
            discount: round_money(discount),
            tax,
        })
    }

    /// Unrounded sum of line item amounts; zero for an empty list
    pub fn line_items_total(line_items: &[LineItem]) -> Result<Decimal> {
        line_items.iter().try_fold(Decimal::ZERO, |total, item| {
            money::add(total, item.amount()?, "line items total")
        })
    }
}

impl Default for InvoiceCalculator {
    fn default() -> Self {
        Self::new()
    }
}
