use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::ChatService;
use crate::presentation::config::Settings;

pub struct AppState<L>
where
    L: LlmClient,
{
    pub chat_service: Arc<ChatService<L>>,
    pub settings: Settings,
}

// Manual impl: deriving Clone would demand L: Clone, which the service
// wrapped in an Arc never needs.
impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            chat_service: Arc::clone(&self.chat_service),
            settings: self.settings.clone(),
        }
    }
}
