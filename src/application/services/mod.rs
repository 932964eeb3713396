mod chat_service;
mod prompt_builder;

pub use chat_service::{ChatError, ChatService};
pub use prompt_builder::{PromptBuilder, PromptLimits, TableStyle, PERSONA};
