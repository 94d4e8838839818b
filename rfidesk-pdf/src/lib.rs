//! PDF text extraction behind a mockable trait.
//!
//! PDF is a layout format, not a semantic one; all this crate promises is the
//! text content in reading order, with whitespace runs collapsed the way the
//! downstream matcher expects.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Errors produced while turning uploaded bytes into text
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The bytes are not a parseable PDF
    #[error("Failed to extract text from PDF: {message}")]
    Parse { message: String },

    /// The PDF parsed but contained no extractable text
    #[error("PDF contained no extractable text")]
    EmptyDocument,

    /// Unexpected failure outside the PDF parser itself
    #[error("Internal extraction error: {message}")]
    Internal { message: String },
}

impl ExtractError {
    /// Create a parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Extracts plain text from an uploaded document.
///
/// The production implementation is [`PdfTextExtractor`]; tests substitute
/// their own to avoid shipping PDF fixtures.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: Vec<u8>) -> Result<String, ExtractError>;

    fn name(&self) -> &str;
}

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

/// `pdf-extract`-backed extractor. Parsing is CPU-bound, so it runs on the
/// blocking pool.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, bytes: Vec<u8>) -> Result<String, ExtractError> {
        let raw = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| ExtractError::internal(e.to_string()))?
            .map_err(|e| ExtractError::parse(e.to_string()))?;

        let text = WHITESPACE_RUNS.replace_all(&raw, " ");
        let text = NEWLINE_RUNS.replace_all(&text, "\n");
        let text = text.trim().to_string();

        if text.is_empty() {
            return Err(ExtractError::EmptyDocument);
        }

        debug!(chars = text.len(), "Extracted text from PDF");
        Ok(text)
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}
