mod invoice;
mod invoice_calculation;
mod line_item;

pub use invoice::{
    CalculateInvoiceRequest, CreateDraftRequest, DraftResponse, UpdateDraftRequest,
    UpdateLineItemRequest,
};
pub use invoice_calculation::InvoiceCalculation;
pub use line_item::LineItem;
