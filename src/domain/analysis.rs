use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Summary,
    Extract,
    Qa,
    #[default]
    General,
}

impl AnalysisType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "summary" => Some(Self::Summary),
            "extract" => Some(Self::Extract),
            "qa" => Some(Self::Qa),
            "general" => Some(Self::General),
            _ => None,
        }
    }

    pub fn task_instruction(&self) -> &'static str {
        match self {
            Self::Summary => {
                "Provide a comprehensive summary of the document, highlighting key points, \
                 main topics, and important insights."
            }
            Self::Extract => {
                "Extract key information, data points, and important details from the \
                 document in a structured format."
            }
            Self::Qa => "Analyze the document and be prepared to answer questions about its content.",
            Self::General => {
                "Analyze the uploaded document and respond to the user's query. Provide \
                 helpful insights, summaries, or specific information as requested."
            }
        }
    }
}
