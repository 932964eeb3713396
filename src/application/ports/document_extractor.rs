use std::path::Path;

use async_trait::async_trait;

use crate::domain::FileContent;

#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(&self, path: &Path) -> Result<FileContent, ExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    #[error("io error: {0}")]
    Io(String),
    #[error("malformed document: {0}")]
    Malformed(String),
}

impl From<std::io::Error> for ExtractorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
