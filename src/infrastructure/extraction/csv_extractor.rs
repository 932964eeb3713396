use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{DocumentExtractor, ExtractorError};
use crate::domain::{FileContent, TableData};

pub struct CsvExtractor;

impl CsvExtractor {
    fn read_table(path: &Path) -> Result<TableData, ExtractorError> {
        let mut reader =
            csv::Reader::from_path(path).map_err(|e| ExtractorError::Io(e.to_string()))?;

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| ExtractorError::Malformed(format!("invalid CSV header: {e}")))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record
                .map_err(|e| ExtractorError::Malformed(format!("invalid CSV record: {e}")))?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        Ok(TableData::new(columns, rows))
    }
}

#[async_trait]
impl DocumentExtractor for CsvExtractor {
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    async fn extract(&self, path: &Path) -> Result<FileContent, ExtractorError> {
        let owned_path = path.to_path_buf();

        let table = tokio::task::spawn_blocking(move || Self::read_table(&owned_path))
            .await
            .map_err(|e| ExtractorError::Malformed(format!("task join error: {e}")))??;

        tracing::debug!(
            rows = table.rows.len(),
            columns = table.columns.len(),
            "CSV parsed"
        );

        Ok(FileContent::Table(table))
    }
}
