use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::vehicles::models::VehicleProfitRequest;
use crate::modules::vehicles::services::ProfitCalculator;

/// Calculate cost, gross profit and margin for a vehicle
/// POST /vehicles/profit
pub async fn calculate_profit(
    request: web::Json<VehicleProfitRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let profit = ProfitCalculator::calculate_vehicle_profit(
        request.purchase_price,
        request.retail_price,
        request.extra_costs,
        request.taxes_on_purchase,
    )?;

    Ok(HttpResponse::Ok().json(profit))
}

/// Configure vehicle routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/vehicles").route("/profit", web::post().to(calculate_profit)));
}
