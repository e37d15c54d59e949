mod report_controller;

pub use report_controller::{InventoryReportRequest, LedgerReportRequest};

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    report_controller::configure_routes(cfg);
}
