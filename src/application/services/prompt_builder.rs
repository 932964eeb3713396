use crate::domain::{
    AnalysisType, FileContent, ParsedFile, PromptDocument, SectionRole, TableData,
};

pub const PERSONA: &str = "Your name is Caramel AI created by HERE AND NOW AI. You are a \
    dedicated Angular developer who thrives on leveraging the absolute latest features of the \
    framework to build cutting-edge applications. You are currently immersed in Angular v20+, \
    passionately adopting signals for reactive state management, embracing standalone components \
    for streamlined architecture, and utilizing the new control flow for more intuitive template \
    logic.\n\nYou also have advanced document analysis capabilities and can help users \
    understand and extract insights from various file formats including PDF, TXT, DOCX, and CSV \
    files.";

const TRUNCATION_MARKER: &str = "[Content truncated for brevity...]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    Csv,
    Markdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptLimits {
    pub max_table_rows: usize,
    pub max_text_chars: usize,
    pub table_style: TableStyle,
}

impl PromptLimits {
    pub fn standard() -> Self {
        Self {
            max_table_rows: 100,
            max_text_chars: 10_000,
            table_style: TableStyle::Csv,
        }
    }

    pub fn compact() -> Self {
        Self {
            max_table_rows: 50,
            max_text_chars: 8_000,
            table_style: TableStyle::Markdown,
        }
    }
}

impl Default for PromptLimits {
    fn default() -> Self {
        Self::standard()
    }
}

/// Assembles the document-analysis prompt: persona, task instruction,
/// document metadata, size-capped body, then the user query.
pub struct PromptBuilder {
    limits: PromptLimits,
}

impl PromptBuilder {
    pub fn new(limits: PromptLimits) -> Self {
        Self { limits }
    }

    pub fn build(
        &self,
        parsed: &ParsedFile,
        query: &str,
        analysis: AnalysisType,
    ) -> PromptDocument {
        let mut prompt = PromptDocument::new();

        prompt.push(SectionRole::System, PERSONA);
        prompt.push(SectionRole::Task, analysis.task_instruction());
        prompt.push(SectionRole::DocumentInfo, document_info(parsed));

        if let Some(body) = self.document_body(parsed) {
            prompt.push(SectionRole::DocumentBody, body);
        }

        if !query.is_empty() {
            prompt.push(SectionRole::UserQuery, query);
        }

        prompt
    }

    // Failed parses never leak into the prompt: error envelopes and
    // error-prefixed text render no body at all.
    fn document_body(&self, parsed: &ParsedFile) -> Option<String> {
        match &parsed.content {
            FileContent::Table(table) => self.render_table(table),
            FileContent::Text(text) => {
                if text.is_empty() || text.starts_with("Error") {
                    return None;
                }
                Some(self.truncate_text(text))
            }
            FileContent::Error(_) => None,
        }
    }

    fn render_table(&self, table: &TableData) -> Option<String> {
        if table.rows.is_empty() {
            return None;
        }

        let cap = self.limits.max_table_rows;
        let visible = &table.rows[..table.rows.len().min(cap)];

        let mut body = match self.limits.table_style {
            TableStyle::Csv => render_csv(&table.columns, visible),
            TableStyle::Markdown => render_markdown(&table.columns, visible),
        };

        if table.rows.len() > cap {
            body.push_str(&format!(
                "\n*Note: Showing first {} rows of {} total rows.*",
                cap,
                table.rows.len()
            ));
        }

        Some(body)
    }

    fn truncate_text(&self, text: &str) -> String {
        match text.char_indices().nth(self.limits.max_text_chars) {
            None => text.to_string(),
            Some((byte_idx, _)) => format!("{}\n\n{}", &text[..byte_idx], TRUNCATION_MARKER),
        }
    }
}

fn document_info(parsed: &ParsedFile) -> String {
    format!(
        "**Filename:** {}\n**File Type:** {}\n**File Size:** {} bytes",
        parsed.filename, parsed.extension, parsed.size_bytes
    )
}

fn render_csv(columns: &[String], rows: &[Vec<String>]) -> String {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer
        .write_record(columns)
        .expect("in-memory CSV write never fails");
    for row in rows {
        writer
            .write_record(row)
            .expect("in-memory CSV write never fails");
    }

    let bytes = writer
        .into_inner()
        .expect("in-memory CSV flush never fails");
    String::from_utf8(bytes)
        .expect("CSV output of UTF-8 records is UTF-8")
        .trim_end()
        .to_string()
}

fn render_markdown(columns: &[String], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("| {} |", columns.join(" | ")));
    lines.push(format!("|{}|", vec![" --- "; columns.len()].join("|")));
    for row in rows {
        lines.push(format!("| {} |", row.join(" | ")));
    }
    lines.join("\n")
}
