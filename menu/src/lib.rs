pub mod config;
pub mod document_processor;
pub mod error;
pub mod gemini_service;
pub mod menu_service;
pub mod models;
pub mod prompt;
pub mod response_normalizer;

pub use config::Config;
pub use document_processor::DocumentProcessor;
pub use error::MenuError;
pub use gemini_service::{CompletionClient, GeminiService};
pub use menu_service::MenuService;
pub use models::*;
pub use response_normalizer::normalize_completion;
