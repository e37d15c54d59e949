//! Dealer invoicing and pricing engine
//!
//! Canadian sales tax by province or territory, invoice totals, vehicle
//! profit, loan financing and in-progress invoice drafts, served over HTTP.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

use actix_web::web;

// Re-export commonly used types
pub use modules::financing;
pub use modules::invoices;
pub use modules::reports;
pub use modules::taxes;
pub use modules::vehicles;

/// Register every HTTP route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    modules::health::controllers::configure(cfg);
    taxes::controllers::configure_tax_routes(cfg);
    invoices::controllers::configure(cfg);
    vehicles::controllers::configure(cfg);
    financing::controllers::configure(cfg);
    reports::controllers::configure(cfg);
}

/// Shared extractor configuration and routes for an application instance
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(middleware::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(middleware::path_error_handler))
        .configure(configure_routes);
}
