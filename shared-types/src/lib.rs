pub mod api;
pub mod rfi;

pub use api::{
    ErrorEnvelope, HealthChecks, HealthResponse, ProcessRfiEnvelope, ScenarioSummary,
    ScenariosResponse,
};
pub use rfi::{Analysis, Category, ProcessedRfi, ProcessingResult, Urgency};
