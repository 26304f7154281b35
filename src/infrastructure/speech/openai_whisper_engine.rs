use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioFile, CredentialSet, Provider};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const TRANSCRIPTION_MODEL: &str = "whisper-1";
const TRANSCRIPTION_LANGUAGE: &str = "ja";

/// Primary speech backend: the OpenAI Whisper transcription endpoint.
pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    base_url: String,
}

impl OpenAiWhisperEngine {
    pub fn new(client: reqwest::Client, base_url: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(
        &self,
        audio: &AudioFile,
        credentials: &CredentialSet,
    ) -> Result<String, TranscriptionError> {
        let api_key = credentials
            .get(Provider::OpenAi)
            .ok_or(TranscriptionError::MissingCredential(Provider::OpenAi))?;

        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part =
            multipart::Part::bytes(audio.bytes.to_vec()).file_name(audio.file_name.clone());
        let form = multipart::Form::new()
            .text("model", TRANSCRIPTION_MODEL)
            .text("language", TRANSCRIPTION_LANGUAGE)
            .part("file", file_part);

        tracing::debug!(
            model = TRANSCRIPTION_MODEL,
            bytes = audio.bytes.len(),
            "Sending audio to the Whisper API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| format!("status {}: {}", status, body));
            return Err(TranscriptionError::ProviderRejected(message));
        }

        let result: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(e.to_string()))?;

        Ok(result.text.trim().to_string())
    }
}
