use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{DocumentExtractor, FileParser};
use crate::domain::{FileContent, FileKind, ParsedFile};

use super::csv_extractor::CsvExtractor;
use super::docx_extractor::DocxExtractor;
use super::pdf_extractor::PdfExtractor;
use super::plain_text_extractor::PlainTextExtractor;

/// Routes a file to the adapter registered for its extension and wraps the
/// outcome in a `ParsedFile` envelope. Never fails: unsupported extensions
/// and extraction failures surface as `FileContent::Error` payloads.
pub struct CompositeExtractor {
    adapters: HashMap<FileKind, Arc<dyn DocumentExtractor>>,
}

impl CompositeExtractor {
    pub fn new(adapters: Vec<(FileKind, Arc<dyn DocumentExtractor>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }
}

#[async_trait]
impl FileParser for CompositeExtractor {
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    async fn parse(&self, path: &Path) -> ParsedFile {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = file_extension(path);
        let kind = FileKind::from_extension(&extension);
        let size_bytes = tokio::fs::metadata(path)
            .await
            .map(|m| m.len())
            .unwrap_or(0);

        let content = match kind.and_then(|k| self.adapters.get(&k)) {
            None => FileContent::Error(format!("Unsupported file type: {extension}")),
            Some(adapter) => match adapter.extract(path).await {
                Ok(content) => content,
                Err(err) => {
                    tracing::warn!(error = %err, "extraction failed");
                    FileContent::Error(format!("Error parsing file: {err}"))
                }
            },
        };

        ParsedFile {
            filename,
            extension,
            kind,
            size_bytes,
            content,
        }
    }
}

impl Default for CompositeExtractor {
    fn default() -> Self {
        Self::new(vec![
            (FileKind::Pdf, Arc::new(PdfExtractor::new()) as _),
            (FileKind::Txt, Arc::new(PlainTextExtractor) as _),
            (FileKind::Docx, Arc::new(DocxExtractor) as _),
            (FileKind::Csv, Arc::new(CsvExtractor) as _),
        ])
    }
}

// Lowercased, with the leading dot, as in `.pdf`; empty when the path has
// no extension.
fn file_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}
