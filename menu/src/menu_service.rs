use crate::document_processor::DocumentProcessor;
use crate::error::MenuError;
use crate::gemini_service::CompletionClient;
use crate::models::MenuResponse;
use crate::prompt::{build_menu_prompt, format_today};
use crate::response_normalizer::normalize_completion;
use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;

// Nothing is cached: the PDF is read and the model is called on every request.
pub struct MenuService {
    pdf_path: PathBuf,
    document_processor: DocumentProcessor,
    completion_client: Arc<dyn CompletionClient>,
}

impl MenuService {
    pub fn new(pdf_path: impl Into<PathBuf>, completion_client: Arc<dyn CompletionClient>) -> Self {
        Self {
            pdf_path: pdf_path.into(),
            document_processor: DocumentProcessor::new(),
            completion_client,
        }
    }

    pub async fn todays_menu(&self) -> Result<MenuResponse, MenuError> {
        let today = format_today(&Local::now());
        self.try_menu_for(&today).await
    }

    pub async fn try_menu_for(&self, today: &str) -> Result<MenuResponse, MenuError> {
        let processor = self.document_processor;
        let path = self.pdf_path.clone();

        let pdf_text = tokio::task::spawn_blocking(move || processor.extract_text(&path))
            .await
            .map_err(|e| MenuError::PdfExtraction(format!("extraction task failed: {e}")))??;

        self.menu_from_text(&pdf_text, today).await
    }

    pub async fn menu_from_text(
        &self,
        pdf_text: &str,
        today: &str,
    ) -> Result<MenuResponse, MenuError> {
        if pdf_text.trim().is_empty() {
            return Err(MenuError::EmptyDocument);
        }

        let prompt = build_menu_prompt(pdf_text, today);
        let start_time = std::time::Instant::now();
        let completion = self.completion_client.complete(&prompt).await?;

        log::info!(
            "Completion received in {} ms ({} chars)",
            start_time.elapsed().as_millis(),
            completion.len()
        );
        log::debug!("Raw completion: {}", completion);

        normalize_completion(&completion)
    }
}
