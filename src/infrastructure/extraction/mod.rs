mod composite_extractor;
mod csv_extractor;
mod docx_extractor;
mod pdf_extractor;
mod plain_text_extractor;

pub use composite_extractor::CompositeExtractor;
pub use csv_extractor::CsvExtractor;
pub use docx_extractor::DocxExtractor;
pub use pdf_extractor::PdfExtractor;
pub use plain_text_extractor::PlainTextExtractor;
