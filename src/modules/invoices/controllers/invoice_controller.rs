use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::invoices::controllers::draft_controller;
use crate::modules::invoices::models::CalculateInvoiceRequest;
use crate::modules::invoices::services::InvoiceCalculator;
use crate::modules::taxes::models::Jurisdiction;

/// Calculate invoice totals without keeping any state
/// POST /invoices/calculate
pub async fn calculate_invoice(
    request: web::Json<CalculateInvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let jurisdiction: Jurisdiction = request.jurisdiction.parse()?;

    let calculation = InvoiceCalculator::new().calculate_invoice_total(
        request.base_amount,
        &request.line_items,
        request.discount,
        jurisdiction,
    )?;

    Ok(HttpResponse::Ok().json(calculation))
}

/// Configure invoice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/invoices")
            .route("/calculate", web::post().to(calculate_invoice))
            .route("/drafts", web::post().to(draft_controller::create_draft))
            .route("/drafts/{id}", web::get().to(draft_controller::get_draft))
            .route("/drafts/{id}", web::patch().to(draft_controller::update_draft))
            .route("/drafts/{id}", web::delete().to(draft_controller::discard_draft))
            .route(
                "/drafts/{id}/line-items",
                web::post().to(draft_controller::add_line_item),
            )
            .route(
                "/drafts/{id}/line-items/{index}",
                web::patch().to(draft_controller::update_line_item),
            )
            .route(
                "/drafts/{id}/line-items/{index}",
                web::delete().to(draft_controller::remove_line_item),
            ),
    );
}
