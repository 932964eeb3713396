use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use zip::ZipArchive;

use crate::application::ports::{DocumentExtractor, ExtractorError};
use crate::domain::FileContent;

static TEXT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<w:t[^>]*>([^<]*)</w:t>").unwrap());

pub struct DocxExtractor;

impl DocxExtractor {
    fn extract_paragraphs(path: &Path) -> Result<String, ExtractorError> {
        let file = std::fs::File::open(path)?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| ExtractorError::Malformed(format!("not a DOCX container: {e}")))?;

        let mut document_xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| ExtractorError::Malformed(format!("missing word/document.xml: {e}")))?
            .read_to_string(&mut document_xml)?;

        let mut paragraphs = Vec::new();

        // A paragraph is everything up to its closing </w:p>; its visible
        // text is the concatenation of the <w:t> runs inside it.
        for paragraph_xml in document_xml.split("</w:p>") {
            let mut text = String::new();
            for capture in TEXT_RUN.captures_iter(paragraph_xml) {
                text.push_str(&capture[1]);
            }
            let text = unescape_xml(&text);
            if !text.trim().is_empty() {
                paragraphs.push(text);
            }
        }

        Ok(paragraphs.join("\n"))
    }
}

fn unescape_xml(escaped: &str) -> String {
    escaped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[async_trait]
impl DocumentExtractor for DocxExtractor {
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    async fn extract(&self, path: &Path) -> Result<FileContent, ExtractorError> {
        let owned_path = path.to_path_buf();

        let text = tokio::task::spawn_blocking(move || Self::extract_paragraphs(&owned_path))
            .await
            .map_err(|e| ExtractorError::Malformed(format!("task join error: {e}")))??;

        Ok(FileContent::Text(text))
    }
}
