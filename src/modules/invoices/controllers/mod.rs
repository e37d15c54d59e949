pub mod draft_controller;
pub mod invoice_controller;

pub use invoice_controller::configure;
