#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionRole {
    System,
    Task,
    DocumentInfo,
    DocumentBody,
    UserQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromptSection {
    pub role: SectionRole,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PromptDocument {
    pub sections: Vec<PromptSection>,
}

impl SectionRole {
    pub fn heading(&self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Task => "Task",
            Self::DocumentInfo => "Document Information",
            Self::DocumentBody => "Document Content",
            Self::UserQuery => "User Query",
        }
    }
}

impl PromptDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, role: SectionRole, body: impl Into<String>) {
        self.sections.push(PromptSection {
            role,
            body: body.into(),
        });
    }

    pub fn section(&self, role: SectionRole) -> Option<&PromptSection> {
        self.sections.iter().find(|s| s.role == role)
    }

    pub fn render(&self) -> String {
        self.sections
            .iter()
            .map(|s| format!("## {}\n\n{}", s.role.heading(), s.body))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
