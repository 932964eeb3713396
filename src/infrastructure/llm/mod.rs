mod gemini_client;

pub use gemini_client::{DEFAULT_BASE_URL, GeminiClient};
