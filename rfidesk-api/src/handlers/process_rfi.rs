use crate::config::ApiConfig;
use crate::models::ProcessRfiForm;
use crate::SharedExtractor;
use actix_multipart::form::MultipartForm;
use actix_web::{post, web, HttpResponse, Responder};
use chrono::Utc;
use rfidesk_engine::{
    clean_rfi_text, fallback_rfi, find_matching_scenario, generate_demo_response,
    with_demo_fallback,
};
use shared_types::{ErrorEnvelope, ProcessRfiEnvelope, ProcessedRfi};
use std::time::{Duration, Instant};
use tracing::{error, info};

pub const INVALID_FILE_TYPE_MESSAGE: &str = "Invalid file type. Please upload a PDF file.";
pub const FILE_TOO_LARGE_MESSAGE: &str =
    "File too large. Please upload a file smaller than 10MB.";
pub const PROCESS_FAILED_MESSAGE: &str = "Failed to process RFI. Please try again.";

#[post("/api/process-rfi")]
pub async fn process_rfi(
    form: MultipartForm<ProcessRfiForm>,
    extractor: web::Data<SharedExtractor>,
    config: web::Data<ApiConfig>,
) -> impl Responder {
    let started = Instant::now();
    let form = form.into_inner();

    let is_pdf = form
        .file
        .content_type
        .as_ref()
        .map(|mime| mime.essence_str() == "application/pdf")
        .unwrap_or(false);
    if !is_pdf {
        return HttpResponse::BadRequest().json(ErrorEnvelope::new(INVALID_FILE_TYPE_MESSAGE));
    }

    if form.file.data.len() > config.upload.max_file_size_bytes {
        return HttpResponse::BadRequest().json(ErrorEnvelope::new(FILE_TOO_LARGE_MESSAGE));
    }

    let project_name = form.project_name.into_inner();
    let rfi_number = form.rfi_number.into_inner();
    let trade_name = form.trade_name.into_inner();
    let urgency = form.urgency.into_inner();

    info!(
        project_name = %project_name,
        rfi_number = %rfi_number,
        trade_name = %trade_name,
        file_size = form.file.data.len(),
        "Processing uploaded RFI"
    );

    let pipeline = run_pipeline(
        extractor.get_ref().clone(),
        form.file.data.to_vec(),
        project_name,
        rfi_number,
        trade_name,
        urgency,
        started,
    );

    let result = with_demo_fallback(
        config.demo.enabled,
        Duration::from_millis(config.demo.timeout_ms),
        pipeline,
        fallback_rfi,
    )
    .await;

    match result {
        Ok(data) => HttpResponse::Ok().json(ProcessRfiEnvelope {
            success: true,
            data,
        }),
        Err(e) => {
            error!(error = %e, "Failed to process RFI");
            HttpResponse::InternalServerError().json(ErrorEnvelope::new(PROCESS_FAILED_MESSAGE))
        }
    }
}

async fn run_pipeline(
    extractor: SharedExtractor,
    bytes: Vec<u8>,
    project_name: String,
    rfi_number: String,
    trade_name: String,
    urgency: String,
    started: Instant,
) -> anyhow::Result<ProcessedRfi> {
    let raw_text = extractor.extract(bytes).await?;
    let clean_text = clean_rfi_text(&raw_text);

    let (analysis, response, document_references) =
        match find_matching_scenario(&clean_text, &trade_name) {
            Some(scenario) => {
                info!(scenario_id = scenario.id, "Matched catalog scenario");
                let response = scenario
                    .response
                    .replace(scenario.rfi_number, &rfi_number)
                    .replace(scenario.project_name, &project_name);
                (
                    scenario.analysis.clone(),
                    response,
                    scenario
                        .document_references
                        .iter()
                        .map(|r| r.to_string())
                        .collect(),
                )
            }
            None => {
                info!("No catalog match, generating response");
                let generated =
                    generate_demo_response(&clean_text, &trade_name, &project_name, &rfi_number);
                (
                    generated.analysis,
                    generated.response,
                    generated.document_references,
                )
            }
        };

    // Truncate for display, mirroring the upload preview on the frontend
    let preview: String = clean_text.chars().take(1000).collect();

    Ok(ProcessedRfi {
        rfi_id: format!("rfi-{}", Utc::now().timestamp_millis()),
        project_name,
        rfi_number,
        trade_name,
        urgency,
        original_text: format!("{preview}..."),
        analysis,
        response,
        processing_time: started.elapsed().as_millis() as u64,
        document_references,
    })
}
