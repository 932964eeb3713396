mod analysis;
mod parsed_file;
mod prompt;
mod table;

pub use analysis::AnalysisType;
pub use parsed_file::{FileContent, FileKind, ParsedFile};
pub use prompt::{PromptDocument, PromptSection, SectionRole};
pub use table::{ColumnSummary, TableData};
