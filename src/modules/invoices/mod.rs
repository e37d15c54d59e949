// Invoice calculation and in-memory draft sessions

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{InvoiceCalculation, LineItem};
pub use services::{
    DraftStore, DraftSweeper, InvoiceCalculator, InvoiceDraftSession, LineItemField,
    MAX_LINE_ITEMS,
};
