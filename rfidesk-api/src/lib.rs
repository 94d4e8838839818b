use rfidesk_pdf::TextExtractor;
use std::sync::Arc;

pub mod config;
pub mod handlers;
pub mod models;

pub type SharedExtractor = Arc<dyn TextExtractor>;
