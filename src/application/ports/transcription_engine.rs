use async_trait::async_trait;

use crate::domain::{AudioFile, CredentialSet, Provider};

/// Uniform contract over the speech-to-text backends: raw audio in, plain
/// transcript out. The engine resolves the key it needs from the caller's
/// credential set.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio: &AudioFile,
        credentials: &CredentialSet,
    ) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("no {0} API key is configured")]
    MissingCredential(Provider),
    #[error("speech provider rejected the request: {0}")]
    ProviderRejected(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
