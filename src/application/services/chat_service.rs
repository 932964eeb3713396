use std::path::Path;
use std::sync::Arc;

use minijinja::Environment;

use crate::application::ports::{FileParser, LlmClient, LlmClientError};
use crate::domain::AnalysisType;

use super::prompt_builder::{PromptBuilder, PromptLimits, PERSONA};

const CHAT_TEMPLATE: &str = "\
## System

{{ persona }}

## User Query

{{ question }}";

pub struct ChatService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    file_parser: Arc<dyn FileParser>,
    prompt_builder: PromptBuilder,
}

impl<L> ChatService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>, file_parser: Arc<dyn FileParser>, limits: PromptLimits) -> Self {
        Self {
            llm_client,
            file_parser,
            prompt_builder: PromptBuilder::new(limits),
        }
    }

    pub async fn converse(&self, message: &str) -> Result<String, ChatError> {
        let prompt = render_template(
            CHAT_TEMPLATE,
            minijinja::context!(persona => PERSONA, question => message),
        )?;

        let answer = self.llm_client.complete(&prompt).await?;

        Ok(answer)
    }

    /// Document-grounded chat. Failures come back as a spoken answer, not an
    /// error: the model reply is replaced by an explanation string.
    pub async fn converse_with_document(
        &self,
        path: &Path,
        query: &str,
        analysis: AnalysisType,
    ) -> String {
        match self.try_converse_with_document(path, query, analysis).await {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(error = %err, "document chat failed");
                format!("Error processing document: {err}")
            }
        }
    }

    async fn try_converse_with_document(
        &self,
        path: &Path,
        query: &str,
        analysis: AnalysisType,
    ) -> Result<String, ChatError> {
        let parsed = self.file_parser.parse(path).await;

        tracing::info!(
            filename = %parsed.filename,
            file_type = %parsed.extension,
            size_bytes = parsed.size_bytes,
            parsed_successfully = parsed.parsed_successfully(),
            "document parsed"
        );

        let prompt = self.prompt_builder.build(&parsed, query, analysis).render();

        let answer = self.llm_client.complete(&prompt).await?;

        Ok(answer)
    }
}

fn render_template(
    template: &str,
    context: minijinja::Value,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("prompt", template)?;
    let tmpl = env.get_template("prompt")?;
    tmpl.render(context)
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("template: {0}")]
    Template(#[from] minijinja::Error),
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
}
