use super::environment::Backend;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub backend: Backend,
    pub database: DatabaseSettings,
    pub storage: StorageSettings,
    pub speech: SpeechSettings,
    pub llm: LlmSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Copy)]
pub enum StorageProviderSetting {
    Local,
    Azure,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub local_path: String,
    pub azure_account: Option<String>,
    pub azure_access_key: Option<String>,
    pub azure_container: Option<String>,
}

/// Endpoint override for the primary transcription backend; both speech
/// providers route through it.
#[derive(Debug, Clone)]
pub struct SpeechSettings {
    pub base_url: Option<String>,
}

/// Per-provider endpoint overrides for the completion backends. Models and
/// sampling are fixed; only the endpoints are configurable, for self-hosted
/// gateways and tests.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub openai_base_url: Option<String>,
    pub gemini_base_url: Option<String>,
    pub groq_base_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Settings {
    /// Reads the full configuration from environment variables, with
    /// defaults suitable for local development.
    pub fn from_env() -> Result<Self, SettingsError> {
        let backend = match std::env::var("BACKEND") {
            Ok(value) => Backend::try_from(value).map_err(SettingsError::Invalid)?,
            Err(_) => Backend::Live,
        };

        let server = ServerSettings {
            host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_parsed("SERVER_PORT").unwrap_or(3000),
        };

        let database = DatabaseSettings {
            url: std::env::var("DATABASE_URL").unwrap_or_default(),
            max_connections: env_parsed("DATABASE_MAX_CONNECTIONS").unwrap_or(5),
        };
        if backend == Backend::Live && database.url.is_empty() {
            return Err(SettingsError::Invalid(
                "DATABASE_URL is required for the live backend".to_string(),
            ));
        }

        let storage_provider = match std::env::var("STORAGE_PROVIDER") {
            Ok(value) => match value.to_lowercase().as_str() {
                "local" => StorageProviderSetting::Local,
                "azure" => StorageProviderSetting::Azure,
                other => {
                    return Err(SettingsError::Invalid(format!(
                        "Invalid storage provider: {}. Expected: local or azure",
                        other
                    )));
                }
            },
            Err(_) => StorageProviderSetting::Local,
        };

        let storage = StorageSettings {
            provider: storage_provider,
            local_path: std::env::var("STORAGE_LOCAL_PATH")
                .unwrap_or_else(|_| "./audio-uploads".to_string()),
            azure_account: std::env::var("AZURE_STORAGE_ACCOUNT").ok(),
            azure_access_key: std::env::var("AZURE_STORAGE_ACCESS_KEY").ok(),
            azure_container: std::env::var("AZURE_STORAGE_CONTAINER").ok(),
        };

        let speech = SpeechSettings {
            base_url: std::env::var("SPEECH_BASE_URL").ok(),
        };

        let llm = LlmSettings {
            openai_base_url: std::env::var("OPENAI_BASE_URL").ok(),
            gemini_base_url: std::env::var("GEMINI_BASE_URL").ok(),
            groq_base_url: std::env::var("GROQ_BASE_URL").ok(),
        };

        Ok(Self {
            server,
            backend,
            database,
            storage,
            speech,
            llm,
        })
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
