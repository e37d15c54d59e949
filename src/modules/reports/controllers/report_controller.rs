use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::reports::models::Sale;
use crate::modules::reports::services::ReportService;
use crate::modules::vehicles::models::Vehicle;

/// Request body for POST /reports/inventory
#[derive(Debug, Deserialize)]
pub struct InventoryReportRequest {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

/// Request body for POST /reports/ledger
#[derive(Debug, Deserialize)]
pub struct LedgerReportRequest {
    #[serde(default)]
    pub sales: Vec<Sale>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

/// POST /reports/inventory
pub async fn inventory_report(
    request: web::Json<InventoryReportRequest>,
) -> Result<HttpResponse, AppError> {
    let summary = ReportService::inventory_summary(&request.vehicles)?;
    Ok(HttpResponse::Ok().json(summary))
}

/// POST /reports/ledger
pub async fn ledger_report(
    request: web::Json<LedgerReportRequest>,
) -> Result<HttpResponse, AppError> {
    let ledger = ReportService::financial_ledger(&request.sales, &request.vehicles)?;
    Ok(HttpResponse::Ok().json(ledger))
}

/// Configure report routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/inventory", web::post().to(inventory_report))
            .route("/ledger", web::post().to(ledger_report)),
    );
}
