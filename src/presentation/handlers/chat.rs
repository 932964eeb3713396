use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn chat_handler<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    tracing::debug!(prompt = %sanitize_prompt(&request.message), "Processing chat message");

    if request.message.is_empty() {
        tracing::warn!("Chat request with empty message");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No message provided".to_string(),
            }),
        )
            .into_response();
    }

    match state.chat_service.converse(&request.message).await {
        Ok(answer) => (StatusCode::OK, Json(ChatResponse { response: answer })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Chat completion failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Error processing chat: {e}"),
                }),
            )
                .into_response()
        }
    }
}
