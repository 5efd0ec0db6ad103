use crate::error::MenuError;
use std::fs;
use std::panic;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentProcessor;

impl DocumentProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract_pages(&self, file_path: &Path) -> Result<Vec<String>, MenuError> {
        let bytes = fs::read(file_path).map_err(|source| MenuError::PdfRead {
            path: file_path.to_path_buf(),
            source,
        })?;

        log::info!(
            "Processing PDF: {} ({} bytes)",
            file_path.display(),
            bytes.len()
        );

        // pdf-extract panics on some malformed documents instead of returning an error.
        let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(&bytes))
            .map_err(|_| MenuError::PdfExtraction("PDF parser panicked".to_string()))?
            .map_err(|e| MenuError::PdfExtraction(e.to_string()))?;

        log::debug!("Extracted {} pages", pages.len());
        Ok(pages)
    }

    pub fn extract_text(&self, file_path: &Path) -> Result<String, MenuError> {
        let pages = self.extract_pages(file_path)?;
        Ok(join_pages(&pages))
    }

    /// Standalone entry point for callers that only want text: failures are logged
    /// and reported as `""`. The request path uses `extract_text` so the HTTP boundary
    /// can tell failure causes apart.
    pub fn get_pdf_text(&self, file_path: &Path) -> String {
        match self.extract_text(file_path) {
            Ok(text) => text,
            Err(e) => {
                log::error!("Error reading PDF: {}", e);
                String::new()
            }
        }
    }
}

fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .filter(|page| !page.trim().is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}
