use super::table::TableData;

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFile {
    pub filename: String,
    pub extension: String,
    pub kind: Option<FileKind>,
    pub size_bytes: u64,
    pub content: FileContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Pdf,
    Txt,
    Docx,
    Csv,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    Text(String),
    Table(TableData),
    Error(String),
}

impl FileKind {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".pdf" => Some(Self::Pdf),
            ".txt" => Some(Self::Txt),
            ".docx" => Some(Self::Docx),
            ".csv" => Some(Self::Csv),
            _ => None,
        }
    }

    pub fn as_extension(&self) -> &'static str {
        match self {
            Self::Pdf => ".pdf",
            Self::Txt => ".txt",
            Self::Docx => ".docx",
            Self::Csv => ".csv",
        }
    }
}

impl FileContent {
    pub fn type_label(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Table(_) => "structured_data",
            Self::Error(_) => "error",
        }
    }
}

impl ParsedFile {
    pub fn parsed_successfully(&self) -> bool {
        !matches!(self.content, FileContent::Error(_))
    }
}
