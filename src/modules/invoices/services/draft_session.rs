use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::money;
use crate::core::{AppError, Result};
use crate::modules::invoices::models::{InvoiceCalculation, LineItem};
use crate::modules::invoices::services::InvoiceCalculator;
use crate::modules::taxes::models::Jurisdiction;

/// Most line items a single draft may hold
pub const MAX_LINE_ITEMS: usize = 100;

/// A single field change on a draft line item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineItemField {
    Description(String),
    Quantity(u32),
    UnitPrice(Decimal),
}

/// In-progress invoice being composed by one user.
///
/// Holds raw inputs only. [`InvoiceDraftSession::calculation`] recomputes the
/// totals from the current state on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceDraftSession {
    base_price: Decimal,
    package_fee: Decimal,
    discount: Decimal,
    line_items: Vec<LineItem>,
    jurisdiction: Jurisdiction,
}

impl InvoiceDraftSession {
    /// Start an empty draft taxed under `jurisdiction`
    pub fn new(jurisdiction: Jurisdiction) -> Self {
        Self {
            base_price: Decimal::ZERO,
            package_fee: Decimal::ZERO,
            discount: Decimal::ZERO,
            line_items: Vec::new(),
            jurisdiction,
        }
    }

    pub fn base_price(&self) -> Decimal {
        self.base_price
    }

    pub fn package_fee(&self) -> Decimal {
        self.package_fee
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    pub fn jurisdiction(&self) -> Jurisdiction {
        self.jurisdiction
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn set_base_price(&mut self, base_price: Decimal) {
        self.base_price = base_price;
    }

    pub fn set_package_fee(&mut self, package_fee: Decimal) {
        self.package_fee = package_fee;
    }

    pub fn set_discount(&mut self, discount: Decimal) {
        self.discount = discount;
    }

    pub fn set_jurisdiction(&mut self, jurisdiction: Jurisdiction) {
        self.jurisdiction = jurisdiction;
    }

    /// Append a blank line item and return its index
    pub fn add_line_item(&mut self) -> Result<usize> {
        if self.line_items.len() >= MAX_LINE_ITEMS {
            return Err(AppError::validation(format!(
                "A draft cannot hold more than {} line items",
                MAX_LINE_ITEMS
            )));
        }

        self.line_items.push(LineItem::blank());
        Ok(self.line_items.len() - 1)
    }

    /// Change one field of the line item at `index`
    pub fn update_line_item(&mut self, index: usize, field: LineItemField) -> Result<()> {
        let count = self.line_items.len();
        let item = self
            .line_items
            .get_mut(index)
            .ok_or_else(|| Self::index_error(index, count))?;

        match field {
            LineItemField::Description(description) => item.description = description,
            LineItemField::Quantity(quantity) => {
                LineItem::validate_quantity(quantity)?;
                item.quantity = quantity;
            }
            LineItemField::UnitPrice(unit_price) => {
                LineItem::validate_unit_price(unit_price)?;
                item.unit_price = unit_price;
            }
        }

        Ok(())
    }

    /// Remove and return the line item at `index`; later items shift down
    pub fn remove_line_item(&mut self, index: usize) -> Result<LineItem> {
        if index >= self.line_items.len() {
            return Err(Self::index_error(index, self.line_items.len()));
        }
        Ok(self.line_items.remove(index))
    }

    /// Recompute the invoice totals from the current state.
    ///
    /// The invoice base amount is `base_price + package_fee`.
    pub fn calculation(&self) -> Result<InvoiceCalculation> {
        let base_amount = money::add(self.base_price, self.package_fee, "draft base amount")?;

        InvoiceCalculator::new().calculate_invoice_total(
            base_amount,
            &self.line_items,
            self.discount,
            self.jurisdiction,
        )
    }

    fn index_error(index: usize, count: usize) -> AppError {
        AppError::validation(format!(
            "Line item index {} out of range (draft has {} items)",
            index, count
        ))
    }
}
