use crate::rfi::{ProcessedRfi, Urgency};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Envelope for a successful RFI processing call
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessRfiEnvelope {
    pub success: bool,
    pub data: ProcessedRfi,
}

/// Envelope for any failed API call
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new<S: Into<String>>(error: S) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Catalog entry projection for the frontend dashboard
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub trade_name: String,
    pub urgency: Urgency,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScenariosResponse {
    pub scenarios: Vec<ScenarioSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HealthChecks {
    pub api: String,
    pub pdf_processor: String,
    pub demo_data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
    pub version: String,
}
