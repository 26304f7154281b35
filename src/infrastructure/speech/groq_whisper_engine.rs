use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioFile, CredentialSet, Provider};

use super::openai_whisper_engine::OpenAiWhisperEngine;

/// Secondary speech backend. Groq exposes no transcription endpoint, so every
/// request is routed through the primary engine with the primary credential;
/// selecting Groq still requires an OpenAI key. The Groq key is accepted in
/// the credential set for the day Groq ships a speech API but is never sent.
pub struct GroqWhisperEngine {
    primary: OpenAiWhisperEngine,
}

impl GroqWhisperEngine {
    pub fn new(client: reqwest::Client, primary_base_url: Option<String>) -> Self {
        Self {
            primary: OpenAiWhisperEngine::new(client, primary_base_url),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for GroqWhisperEngine {
    async fn transcribe(
        &self,
        audio: &AudioFile,
        credentials: &CredentialSet,
    ) -> Result<String, TranscriptionError> {
        let _groq_key = credentials.get(Provider::Groq);

        tracing::debug!("Routing Groq transcription through the primary endpoint");
        self.primary.transcribe(audio, credentials).await
    }
}
