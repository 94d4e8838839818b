use actix_web::{test, web, App};
use async_trait::async_trait;
use rfidesk_api::config::ApiConfig;
use rfidesk_api::handlers::health::health;
use rfidesk_api::handlers::process_rfi::process_rfi;
use rfidesk_api::handlers::scenarios::list_scenarios;
use rfidesk_api::models::multipart_form_config;
use rfidesk_api::SharedExtractor;
use rfidesk_pdf::{ExtractError, TextExtractor};
use std::sync::Arc;

pub struct TestApp<S> {
    pub app: S,
}

/// Extractor double so tests control the "PDF" text without shipping fixtures
pub struct MockExtractor {
    text: Option<String>,
}

impl MockExtractor {
    pub fn returning<S: Into<String>>(text: S) -> Self {
        MockExtractor {
            text: Some(text.into()),
        }
    }

    pub fn failing() -> Self {
        MockExtractor { text: None }
    }
}

#[async_trait]
impl TextExtractor for MockExtractor {
    async fn extract(&self, _bytes: Vec<u8>) -> Result<String, ExtractError> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => Err(ExtractError::parse("mock extraction failure")),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

pub async fn setup_test_app(
    extractor: MockExtractor,
    config: ApiConfig,
) -> TestApp<
    impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
> {
    let extractor: SharedExtractor = Arc::new(extractor);

    // Same multipart wiring as the real server so extractor limits apply
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(extractor))
            .app_data(web::Data::new(config.clone()))
            .app_data(multipart_form_config(&config))
            .service(process_rfi)
            .service(list_scenarios)
            .service(health),
    )
    .await;

    TestApp { app }
}

pub const TEST_BOUNDARY: &str = "----rfidesk-test-boundary";

/// Builds a multipart/form-data payload with the standard RFI form fields
/// plus one file part.
pub fn multipart_body(
    fields: &[(&str, &str)],
    file_bytes: &[u8],
    file_content_type: &str,
) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{TEST_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    body.extend_from_slice(
        format!(
            "--{TEST_BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"upload.pdf\"\r\nContent-Type: {file_content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(file_bytes);
    body.extend_from_slice(format!("\r\n--{TEST_BOUNDARY}--\r\n").as_bytes());

    body
}

pub fn standard_fields<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("projectName", "Harbor Tower"),
        ("rfiNumber", "RFI-777"),
        ("tradeName", "Electrical"),
        ("urgency", "Medium"),
    ]
}
