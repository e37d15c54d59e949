use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::taxes::models::TaxBreakdown;

/// Full invoice breakdown: the inputs that built the subtotal plus its taxes.
///
/// Derived entirely from its inputs and recomputed on every change; callers
/// decide which fields to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceCalculation {
    pub base_amount: Decimal,
    pub line_items_total: Decimal,
    pub discount: Decimal,
    #[serde(flatten)]
    pub tax: TaxBreakdown,
}

impl InvoiceCalculation {
    pub fn subtotal(&self) -> Decimal {
        self.tax.subtotal
    }

    pub fn tax_amount(&self) -> Decimal {
        self.tax.tax_amount
    }

    pub fn grand_total(&self) -> Decimal {
        self.tax.grand_total
    }
}
