pub mod draft_session;
pub mod draft_store;
pub mod draft_sweeper;
pub mod invoice_calculator;

pub use draft_session::{InvoiceDraftSession, LineItemField, MAX_LINE_ITEMS};
pub use draft_store::{DraftStore, DEFAULT_IDLE_TIMEOUT};
pub use draft_sweeper::{DraftSweeper, DEFAULT_SWEEP_INTERVAL};
pub use invoice_calculator::InvoiceCalculator;
