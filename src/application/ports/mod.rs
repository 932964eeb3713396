mod document_extractor;
mod file_parser;
mod llm_client;

pub use document_extractor::{DocumentExtractor, ExtractorError};
pub use file_parser::FileParser;
pub use llm_client::{LlmClient, LlmClientError};
