use std::path::PathBuf;
use thiserror::Error;

/// Every way producing a menu can fail. The HTTP boundary collapses all of them
/// into the default empty menu.
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Failed to read PDF {path:?}: {source}")]
    PdfRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to extract text from PDF: {0}")]
    PdfExtraction(String),
    #[error("PDF contained no extractable text")]
    EmptyDocument,
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("Failed to send request to completion service: {0}")]
    CompletionRequest(reqwest::Error),
    #[error("Completion service returned {status}: {body}")]
    CompletionApi { status: u16, body: String },
    #[error("Failed to deserialize completion response: {0}")]
    CompletionDeserialization(reqwest::Error),
    #[error("Completion service returned no text")]
    EmptyCompletion,
    #[error("No JSON object found in completion")]
    NoJsonSpan,
    #[error("Completion contained malformed JSON: {0}")]
    MalformedJson(serde_json::Error),
    #[error("Completion JSON does not match the menu shape: {0}")]
    SchemaMismatch(serde_json::Error),
    #[error("GOOGLE_API_KEY is missing")]
    MissingApiKey,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MenuError {
    pub fn kind(&self) -> &'static str {
        match self {
            MenuError::PdfRead { .. } => "pdf_read",
            MenuError::PdfExtraction(_) => "pdf_extraction",
            MenuError::EmptyDocument => "empty_document",
            MenuError::ClientBuild(_) => "client_build",
            MenuError::CompletionRequest(_) => "completion_request",
            MenuError::CompletionApi { .. } => "completion_api",
            MenuError::CompletionDeserialization(_) => "completion_deserialization",
            MenuError::EmptyCompletion => "empty_completion",
            MenuError::NoJsonSpan => "no_json_span",
            MenuError::MalformedJson(_) => "malformed_json",
            MenuError::SchemaMismatch(_) => "schema_mismatch",
            MenuError::MissingApiKey => "missing_api_key",
            MenuError::InvalidConfig(_) => "invalid_config",
        }
    }
}
