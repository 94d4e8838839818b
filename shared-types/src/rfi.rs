use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Urgency ladder shared by RFIs and their analyses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
            Urgency::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// How an RFI is classified after analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Clarification,
    Conflict,
    #[serde(rename = "Missing Info")]
    MissingInfo,
    #[serde(rename = "Change Request")]
    ChangeRequest,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Clarification => "Clarification",
            Category::Conflict => "Conflict",
            Category::MissingInfo => "Missing Info",
            Category::ChangeRequest => "Change Request",
        };
        f.write_str(label)
    }
}

/// Analysis metadata attached to a processed RFI
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub category: Category,
    pub urgency: Urgency,
    pub affected_trades: Vec<String>,
    pub response_strategy: String,
}

/// Outcome of one processing pass over an uploaded RFI
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Milliseconds spent processing
    pub processing_time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The `data` payload returned for a successfully processed RFI
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedRfi {
    pub rfi_id: String,
    pub project_name: String,
    pub rfi_number: String,
    pub trade_name: String,
    /// Echoed verbatim from the upload form
    pub urgency: String,
    pub original_text: String,
    pub analysis: Analysis,
    pub response: String,
    /// Milliseconds spent processing
    pub processing_time: u64,
    pub document_references: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_serialize_with_their_display_names() {
        assert_eq!(
            serde_json::to_string(&Category::MissingInfo).unwrap(),
            "\"Missing Info\""
        );
        assert_eq!(
            serde_json::to_string(&Category::ChangeRequest).unwrap(),
            "\"Change Request\""
        );
        assert_eq!(
            serde_json::from_str::<Category>("\"Conflict\"").unwrap(),
            Category::Conflict
        );
    }

    #[test]
    fn analysis_uses_camel_case_keys() {
        let analysis = Analysis {
            category: Category::Clarification,
            urgency: Urgency::Medium,
            affected_trades: vec!["Electrical".to_string()],
            response_strategy: "Answer directly".to_string(),
        };
        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["affectedTrades"][0], "Electrical");
        assert_eq!(value["responseStrategy"], "Answer directly");
    }

    #[test]
    fn processing_result_omits_absent_fields() {
        let result = ProcessingResult {
            success: false,
            analysis: None,
            response: None,
            processing_time: 12,
            error: Some("Failed to process RFI. Please try again.".to_string()),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("analysis").is_none());
        assert!(value.get("response").is_none());
        assert_eq!(value["processingTime"], 12);
    }
}
