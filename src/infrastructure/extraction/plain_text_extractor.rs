use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{DocumentExtractor, ExtractorError};
use crate::domain::FileContent;

pub struct PlainTextExtractor;

#[async_trait]
impl DocumentExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<FileContent, ExtractorError> {
        let bytes = tokio::fs::read(path).await?;

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            // Latin-1 is total: every byte decodes to the scalar with the
            // same value, so invalid UTF-8 never fails outright.
            Err(err) => err.into_bytes().iter().map(|&b| char::from(b)).collect(),
        };

        Ok(FileContent::Text(text))
    }
}
