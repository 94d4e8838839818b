use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use rfidesk_engine::scenarios;
use shared_types::{HealthChecks, HealthResponse};

/// Basic health checks so the demo can be smoke-tested before a presentation
#[get("/api/health")]
pub async fn health() -> impl Responder {
    let demo_data_ok = !scenarios().is_empty();

    let status = if demo_data_ok { "healthy" } else { "unhealthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        timestamp: Utc::now().to_rfc3339(),
        checks: HealthChecks {
            api: "ok".to_string(),
            pdf_processor: "ok".to_string(),
            demo_data: if demo_data_ok { "ok" } else { "missing" }.to_string(),
        },
        version: concat!(env!("CARGO_PKG_VERSION"), "-demo").to_string(),
    })
}
