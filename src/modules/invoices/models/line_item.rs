// LineItem model with derived amount
//
// A line item is a quantity of something sold at a unit price on an invoice
// or an invoice draft. The amount is always derived from its inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::{self, round_money};
use crate::core::{AppError, Result};

/// Represents a single line item in an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Description of the product or service
    #[serde(default)]
    pub description: String,

    /// Quantity of items (at least 1)
    pub quantity: u32,

    /// Price per unit (non-negative)
    pub unit_price: Decimal,
}

impl LineItem {
    /// Create a new line item with validation
    ///
    /// # Arguments
    /// * `description` - Product/service description (may be empty)
    /// * `quantity` - Must be at least 1
    /// * `unit_price` - Must be non-negative
    pub fn new(description: impl Into<String>, quantity: u32, unit_price: Decimal) -> Result<Self> {
        Self::validate_quantity(quantity)?;
        Self::validate_unit_price(unit_price)?;

        Ok(Self {
            description: description.into(),
            quantity,
            unit_price,
        })
    }

    /// The empty item appended by a draft: no description, one unit at zero
    pub fn blank() -> Self {
        Self {
            description: String::new(),
            quantity: 1,
            unit_price: Decimal::ZERO,
        }
    }

    /// Unrounded amount: quantity × unit_price
    pub fn amount(&self) -> Result<Decimal> {
        money::mul(Decimal::from(self.quantity), self.unit_price, "line item amount")
    }

    /// Amount rounded to cents, for snapshots stored alongside an invoice
    pub fn rounded_amount(&self) -> Result<Decimal> {
        Ok(round_money(self.amount()?))
    }

    /// Validate quantity (must be at least 1)
    pub(crate) fn validate_quantity(quantity: u32) -> Result<()> {
        if quantity < 1 {
            return Err(AppError::validation(format!(
                "Quantity must be at least 1, got: {}",
                quantity
            )));
        }

        Ok(())
    }

    /// Validate unit price (must be non-negative)
    pub(crate) fn validate_unit_price(unit_price: Decimal) -> Result<()> {
        if unit_price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Unit price must be non-negative, got: {}",
                unit_price
            )));
        }

        Ok(())
    }
}
