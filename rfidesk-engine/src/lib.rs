pub mod catalog;
pub mod cleaner;
pub mod demo;
pub mod generator;
pub mod matcher;

pub use catalog::{scenario_summaries, scenarios, Scenario};
pub use cleaner::clean_rfi_text;
pub use demo::{fallback_rfi, with_demo_fallback};
pub use generator::{generate_demo_response, GeneratedResponse};
pub use matcher::find_matching_scenario;
