use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::financing::models::{FinancingTerms, ScheduleRequest};
use crate::modules::financing::services::FinancingCalculator;

/// Quote the payment for a loan
/// POST /financing/calculate
pub async fn calculate_financing(
    terms: web::Json<FinancingTerms>,
) -> Result<HttpResponse, AppError> {
    let summary = FinancingCalculator::calculate_financing(&terms)?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Month-by-month amortization schedule
/// POST /financing/schedule
pub async fn amortization_schedule(
    request: web::Json<ScheduleRequest>,
) -> Result<HttpResponse, AppError> {
    let schedule = FinancingCalculator::generate_amortization_schedule(
        request.principal,
        request.interest_rate,
        request.term_months,
    )?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "term_months": request.term_months,
        "schedule": schedule,
    })))
}

/// Configure financing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/financing")
            .route("/calculate", web::post().to(calculate_financing))
            .route("/schedule", web::post().to(amortization_schedule)),
    );
}
