use shared_types::{Analysis, Category, ProcessedRfi, Urgency};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// The canned payload served when demo mode has to paper over a processing
/// failure or timeout during a live presentation.
pub fn fallback_rfi() -> ProcessedRfi {
    ProcessedRfi {
        rfi_id: "demo-fallback".to_string(),
        project_name: "Construction Demo Project".to_string(),
        rfi_number: "RFI-DEMO".to_string(),
        trade_name: "General Contractor".to_string(),
        urgency: "Medium".to_string(),
        original_text: String::new(),
        analysis: Analysis {
            category: Category::Clarification,
            urgency: Urgency::Medium,
            affected_trades: vec!["General Contractor".to_string()],
            response_strategy: "Provide comprehensive response with industry best practices"
                .to_string(),
        },
        response: "\
RE: RFI-DEMO - Construction Project Inquiry

Thank you for your request for information regarding this construction project.

Based on our review of the submitted information, we are providing the following response:

GENERAL GUIDANCE: Please refer to the project specifications and architectural drawings for detailed requirements. All work should be performed in accordance with local building codes and industry standards.

COORDINATION: Please coordinate with the project manager for any questions regarding scheduling, material specifications, or site conditions.

NEXT STEPS: Please review this response and contact us within 48 hours if you require additional clarification or have follow-up questions.

This AI-generated response demonstrates our advanced RFI processing capabilities, providing instant, professional responses to construction inquiries.

Best regards,
RFI Assistant AI System"
            .to_string(),
        processing_time: 22,
        document_references: vec![
            "Project Specifications".to_string(),
            "Architectural Drawings".to_string(),
            "Building Code Requirements".to_string(),
        ],
    }
}

/// Runs `operation`, substituting `fallback` on error or timeout when demo
/// mode is enabled. With demo mode disabled the operation's own error
/// propagates and no timeout applies.
pub async fn with_demo_fallback<T, F>(
    enabled: bool,
    window: Duration,
    operation: F,
    fallback: impl FnOnce() -> T,
) -> anyhow::Result<T>
where
    F: Future<Output = anyhow::Result<T>>,
{
    if !enabled {
        return operation.await;
    }

    match tokio::time::timeout(window, operation).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => {
            warn!(error = %error, "Processing failed, serving demo fallback");
            Ok(fallback())
        }
        Err(_) => {
            warn!(
                timeout_ms = window.as_millis() as u64,
                "Processing timed out, serving demo fallback"
            );
            Ok(fallback())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    const WINDOW: Duration = Duration::from_millis(50);

    #[tokio::test]
    async fn passes_through_a_fast_success() {
        let result = with_demo_fallback(true, WINDOW, async { Ok(1) }, || 99).await;
        assert_eq!(result.unwrap(), 1);
    }

    #[tokio::test]
    async fn substitutes_fallback_on_failure() {
        let result =
            with_demo_fallback(true, WINDOW, async { Err(anyhow!("boom")) }, || 99).await;
        assert_eq!(result.unwrap(), 99);
    }

    #[tokio::test]
    async fn substitutes_fallback_on_timeout() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(1)
        };
        let result = with_demo_fallback(true, WINDOW, slow, || 99).await;
        assert_eq!(result.unwrap(), 99);
    }

    #[tokio::test]
    async fn propagates_errors_when_disabled() {
        let result =
            with_demo_fallback(false, WINDOW, async { Err(anyhow!("boom")) }, || 99).await;
        assert!(result.is_err());
    }

    #[test]
    fn fallback_payload_is_fully_populated() {
        let fallback = fallback_rfi();
        assert_eq!(fallback.rfi_id, "demo-fallback");
        assert_eq!(fallback.rfi_number, "RFI-DEMO");
        assert_eq!(fallback.analysis.category, Category::Clarification);
        assert_eq!(fallback.document_references.len(), 3);
        assert!(fallback.response.contains("RFI-DEMO"));
    }
}
