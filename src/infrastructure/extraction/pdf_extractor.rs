use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document;

use crate::application::ports::{DocumentExtractor, ExtractorError};
use crate::domain::FileContent;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<String, ExtractorError> {
        let doc = Document::load(path)
            .map_err(|e| ExtractorError::Malformed(format!("failed to parse PDF: {e}")))?;

        let mut pages = Vec::new();

        // Page numbers from get_pages() are 1-based and ordered.
        for page_num in doc.get_pages().keys() {
            let Ok(text) = doc.extract_text(&[*page_num]) else {
                continue;
            };
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                pages.push(format!("Page {page_num}:\n{trimmed}"));
            }
        }

        Ok(pages.join("\n\n"))
    }
}

#[async_trait]
impl DocumentExtractor for PdfExtractor {
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    async fn extract(&self, path: &Path) -> Result<FileContent, ExtractorError> {
        let owned_path = path.to_path_buf();

        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&owned_path)),
        )
        .await
        .map_err(|_| ExtractorError::Malformed("PDF extraction timed out".to_string()))?
        .map_err(|e| ExtractorError::Malformed(format!("task join error: {e}")))??;

        tracing::info!(chars = text.len(), "PDF text extraction complete");

        Ok(FileContent::Text(text))
    }
}
