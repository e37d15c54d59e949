//! Tax controller for HTTP endpoints
//!
//! Exposes the jurisdiction rate table and the tax calculator.

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::taxes::models::{all_rates, lookup, Jurisdiction, JurisdictionRate};
use crate::modules::taxes::services::TaxCalculator;

/// Request body for POST /taxes/calculate
#[derive(Debug, Deserialize)]
pub struct CalculateTaxRequest {
    pub subtotal: Decimal,
    pub jurisdiction: String,
}

/// List every supported jurisdiction
///
/// GET /taxes/jurisdictions
pub async fn list_jurisdictions() -> HttpResponse {
    let jurisdictions: Vec<&JurisdictionRate> = all_rates().collect();

    HttpResponse::Ok().json(serde_json::json!({
        "jurisdictions": jurisdictions,
    }))
}

/// Get the rates of a single jurisdiction
///
/// GET /taxes/jurisdictions/{code}
pub async fn get_jurisdiction(code: web::Path<String>) -> Result<HttpResponse, AppError> {
    let rate = lookup(&code)?;

    Ok(HttpResponse::Ok().json(rate))
}

/// Calculate the tax breakdown for a subtotal
///
/// POST /taxes/calculate
pub async fn calculate_tax(
    request: web::Json<CalculateTaxRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let jurisdiction: Jurisdiction = request.jurisdiction.parse()?;

    let breakdown = TaxCalculator::new().calculate_tax(request.subtotal, jurisdiction)?;

    Ok(HttpResponse::Ok().json(breakdown))
}

/// Configure tax routes
pub fn configure_tax_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/taxes")
            .route("/jurisdictions", web::get().to(list_jurisdictions))
            .route("/jurisdictions/{code}", web::get().to(get_jurisdiction))
            .route("/calculate", web::post().to(calculate_tax)),
    );
}
