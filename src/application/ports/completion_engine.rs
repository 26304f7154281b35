use async_trait::async_trait;

use crate::domain::{CredentialSet, Provider};

/// Uniform contract over the text-generation backends: the prompt template
/// steers the model, the transcript is the input, the first generated choice
/// comes back.
#[async_trait]
pub trait CompletionEngine: Send + Sync {
    async fn complete(
        &self,
        transcript: &str,
        prompt: &str,
        credentials: &CredentialSet,
    ) -> Result<String, CompletionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("no {0} API key is configured")]
    MissingCredential(Provider),
    #[error("text provider rejected the request: {0}")]
    ProviderRejected(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
