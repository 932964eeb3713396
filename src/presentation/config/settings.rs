use crate::application::services::PromptLimits;
use crate::infrastructure::llm::DEFAULT_BASE_URL;

use super::environment::Environment;

#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    pub upload: UploadSettings,
    pub prompt_profile: PromptProfile,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptProfile {
    Standard,
    Compact,
}

impl PromptProfile {
    pub fn limits(&self) -> PromptLimits {
        match self {
            Self::Standard => PromptLimits::standard(),
            Self::Compact => PromptLimits::compact(),
        }
    }
}

impl std::str::FromStr for PromptProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown prompt profile {other:?}")),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("GEMINI_API_KEY is required")]
    MissingApiKey,
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

impl Settings {
    /// Reads configuration from the process environment. Missing optional
    /// variables fall back to defaults; a missing API key is fatal.
    pub fn from_env() -> Result<Self, SettingsError> {
        let environment = parse_var("APP_ENV", Environment::Local)?;

        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("SERVER_PORT", 3000)?;

        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(SettingsError::MissingApiKey)?;
        let model = std::env::var("GEMINI_MODEL")
            .unwrap_or_else(|_| "gemini-2.5-flash-lite".to_string());
        let base_url =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let max_file_size_mb = parse_var("MAX_UPLOAD_MB", 10)?;

        let prompt_profile = parse_var("PROMPT_PROFILE", PromptProfile::Standard)?;

        Ok(Self {
            environment,
            server: ServerSettings { host, port },
            gemini: GeminiSettings {
                api_key,
                model,
                base_url,
            },
            upload: UploadSettings { max_file_size_mb },
            prompt_profile,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, SettingsError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| SettingsError::InvalidValue { name, value: raw }),
        Err(_) => Ok(default),
    }
}
