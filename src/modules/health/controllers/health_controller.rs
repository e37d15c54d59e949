use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::invoices::services::DraftStore;
use crate::modules::taxes::models::all_rates;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub application: String,
    /// Number of jurisdictions in the rate table
    pub jurisdictions: usize,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub draft_sessions: usize,
    pub draft_capacity: usize,
    pub accepting_drafts: bool,
}

/// GET /health - Liveness probe
/// Returns 200 if the application is alive (can respond to requests)
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            application: "healthy".to_string(),
            jurisdictions: all_rates().count(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
/// Returns 503 once the draft store is full
pub async fn readiness_check(store: web::Data<DraftStore>) -> impl Responder {
    let draft_sessions = store.len().await;
    let draft_capacity = store.max_sessions();
    let accepting_drafts = draft_sessions < draft_capacity;

    if !accepting_drafts {
        tracing::warn!(draft_sessions, "Readiness check failed: draft store is full");
    }

    let response = ReadinessResponse {
        ready: accepting_drafts,
        checks: ReadinessChecks {
            draft_sessions,
            draft_capacity,
            accepting_drafts,
        },
    };

    if accepting_drafts {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
