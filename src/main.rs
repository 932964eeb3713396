use std::sync::Arc;

use tokio::net::TcpListener;

use caramel::application::services::ChatService;
use caramel::infrastructure::extraction::CompositeExtractor;
use caramel::infrastructure::llm::GeminiClient;
use caramel::infrastructure::observability::{TracingConfig, init_tracing};
use caramel::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            ..TracingConfig::default()
        },
        settings.server.port,
    );

    let llm_client = Arc::new(GeminiClient::new(
        &settings.gemini.base_url,
        &settings.gemini.api_key,
        &settings.gemini.model,
    ));
    let file_parser = Arc::new(CompositeExtractor::default());

    let chat_service = Arc::new(ChatService::new(
        llm_client,
        file_parser,
        settings.prompt_profile.limits(),
    ));

    let state = AppState {
        chat_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
