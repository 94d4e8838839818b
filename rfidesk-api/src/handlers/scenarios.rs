use actix_web::{get, HttpResponse, Responder};
use rfidesk_engine::scenario_summaries;
use shared_types::ScenariosResponse;

#[get("/api/scenarios")]
pub async fn list_scenarios() -> impl Responder {
    HttpResponse::Ok().json(ScenariosResponse {
        scenarios: scenario_summaries(),
    })
}
