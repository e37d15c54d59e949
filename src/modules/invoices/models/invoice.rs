// Invoice request/response shapes for the calculation and draft endpoints

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::invoice_calculation::InvoiceCalculation;
use super::line_item::LineItem;
use crate::core::{AppError, Result};
use crate::modules::invoices::services::{InvoiceDraftSession, LineItemField};
use crate::modules::taxes::models::Jurisdiction;

/// Request body for POST /invoices/calculate
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateInvoiceRequest {
    pub base_amount: Decimal,

    #[serde(default)]
    pub line_items: Vec<LineItem>,

    #[serde(default)]
    pub discount: Decimal,

    /// Two-letter province or territory code
    pub jurisdiction: String,
}

/// Request body for POST /invoices/drafts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDraftRequest {
    /// Falls back to the configured default when absent
    pub jurisdiction: Option<String>,
}

impl CreateDraftRequest {
    /// Parse a create body. Only an empty body means "no jurisdiction"; any
    /// other body must be a valid request.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(body)
            .map_err(|err| AppError::validation(format!("Invalid request body: {}", err)))
    }

    pub fn jurisdiction(&self) -> Result<Option<Jurisdiction>> {
        self.jurisdiction
            .as_deref()
            .map(|code| code.parse::<Jurisdiction>())
            .transpose()
    }
}

/// Request body for PATCH /invoices/drafts/{id}; absent fields are left as they are
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDraftRequest {
    pub base_price: Option<Decimal>,
    pub package_fee: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub jurisdiction: Option<String>,
}

impl UpdateDraftRequest {
    /// Apply every present field to `draft`
    pub fn apply(&self, draft: &mut InvoiceDraftSession) -> Result<()> {
        if let Some(code) = self.jurisdiction.as_deref() {
            draft.set_jurisdiction(code.parse()?);
        }
        if let Some(base_price) = self.base_price {
            draft.set_base_price(base_price);
        }
        if let Some(package_fee) = self.package_fee {
            draft.set_package_fee(package_fee);
        }
        if let Some(discount) = self.discount {
            draft.set_discount(discount);
        }

        Ok(())
    }
}

/// Request body for PATCH /invoices/drafts/{id}/line-items/{index}
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLineItemRequest {
    pub description: Option<String>,
    pub quantity: Option<u32>,
    pub unit_price: Option<Decimal>,
}

impl UpdateLineItemRequest {
    /// The field updates carried by this request, in a fixed order
    pub fn into_fields(self) -> Vec<LineItemField> {
        let mut fields = Vec::new();
        if let Some(description) = self.description {
            fields.push(LineItemField::Description(description));
        }
        if let Some(quantity) = self.quantity {
            fields.push(LineItemField::Quantity(quantity));
        }
        if let Some(unit_price) = self.unit_price {
            fields.push(LineItemField::UnitPrice(unit_price));
        }
        fields
    }
}

/// Draft state plus its freshly computed totals
#[derive(Debug, Clone, Serialize)]
pub struct DraftResponse {
    pub id: Uuid,
    pub draft: InvoiceDraftSession,
    /// Rounded amount of each line item, by index
    pub line_item_amounts: Vec<Decimal>,
    pub calculation: InvoiceCalculation,
}

impl DraftResponse {
    pub fn new(id: Uuid, draft: InvoiceDraftSession) -> Result<Self> {
        let calculation = draft.calculation()?;
        let line_item_amounts = draft
            .line_items()
            .iter()
            .map(LineItem::rounded_amount)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id,
            draft,
            line_item_amounts,
            calculation,
        })
    }
}
