mod environment;
mod settings;

pub use environment::Backend;
pub use settings::{
    DatabaseSettings, LlmSettings, ServerSettings, Settings, SettingsError, SpeechSettings,
    StorageProviderSetting, StorageSettings,
};
