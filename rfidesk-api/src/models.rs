use crate::config::ApiConfig;
use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm, MultipartFormConfig};

/// Multipart payload accepted by the RFI processing endpoint
#[derive(Debug, MultipartForm)]
pub struct ProcessRfiForm {
    pub file: Bytes,
    #[multipart(rename = "projectName")]
    pub project_name: Text<String>,
    #[multipart(rename = "rfiNumber")]
    pub rfi_number: Text<String>,
    #[multipart(rename = "tradeName")]
    pub trade_name: Text<String>,
    pub urgency: Text<String>,
}

/// Fixed ceiling for the multipart payload itself, kept well above the
/// configurable upload limit so oversized files still reach the handler's
/// own size check and get its JSON error envelope instead of a bare
/// extractor rejection
const MULTIPART_CEILING_BYTES: usize = 64 * 1024 * 1024;

/// Multipart limits for the RFI upload route. Shared by the server and the
/// test harness so both run the same extractor configuration.
pub fn multipart_form_config(config: &ApiConfig) -> MultipartFormConfig {
    let limit = MULTIPART_CEILING_BYTES.max(config.upload.max_file_size_bytes * 2);
    MultipartFormConfig::default()
        .total_limit(limit)
        .memory_limit(limit)
}
