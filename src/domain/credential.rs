use std::collections::HashMap;

use super::provider::Provider;

/// The API keys one owner has on file, fetched once per pipeline run. Secrets
/// are opaque to the pipeline and passed through to the adapters unmodified.
#[derive(Debug, Clone, Default)]
pub struct CredentialSet {
    secrets: HashMap<Provider, String>,
}

impl CredentialSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, provider: Provider, secret: impl Into<String>) {
        self.secrets.insert(provider, secret.into());
    }

    pub fn with(mut self, provider: Provider, secret: impl Into<String>) -> Self {
        self.insert(provider, secret);
        self
    }

    pub fn get(&self, provider: Provider) -> Option<&str> {
        self.secrets.get(&provider).map(String::as_str)
    }

    pub fn contains(&self, provider: Provider) -> bool {
        self.secrets.contains_key(&provider)
    }
}
