use std::path::Path;

use async_trait::async_trait;

use crate::domain::ParsedFile;

/// Turns an uploaded file into the parsed envelope. Total by contract:
/// unsupported or broken files come back as error-content envelopes, never
/// as failures.
#[async_trait]
pub trait FileParser: Send + Sync {
    async fn parse(&self, path: &Path) -> ParsedFile;
}
