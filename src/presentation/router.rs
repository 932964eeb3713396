use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::LlmClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{chat_handler, health_handler, upload_handler};
use crate::presentation::state::AppState;

// Multipart framing headroom on top of the configured file cap; the handler
// enforces the cap itself with a clean 400.
const UPLOAD_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn create_router<L>(state: AppState<L>) -> Router
where
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(
        state.settings.upload.max_file_size_mb * 1024 * 1024 + UPLOAD_OVERHEAD_BYTES,
    );

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/chat", post(chat_handler::<L>))
        .route("/api/chat/upload", post(upload_handler::<L>))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
