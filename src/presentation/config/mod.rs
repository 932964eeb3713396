mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    GeminiSettings, PromptProfile, ServerSettings, Settings, SettingsError, UploadSettings,
};
