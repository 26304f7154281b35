pub mod auth;
pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use auth::{AuthenticatedUser, MaybeUser, USER_ID_HEADER};
pub use config::{
    Backend, DatabaseSettings, LlmSettings, ServerSettings, Settings, SettingsError,
    SpeechSettings, StorageProviderSetting, StorageSettings,
};
pub use router::create_router;
pub use state::{AppState, RegistryProgress, RunProgress, RunRegistry, RunState};
