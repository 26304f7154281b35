use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionEngine, CompletionError};
use crate::domain::{CredentialSet, Provider};
use crate::infrastructure::observability::sanitize_excerpt;

use super::SAMPLING_TEMPERATURE;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const COMPLETION_MODEL: &str = "gemini-1.5-pro";
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, base_url: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<Part>,
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
impl CompletionEngine for GeminiClient {
    async fn complete(
        &self,
        transcript: &str,
        prompt: &str,
        credentials: &CredentialSet,
    ) -> Result<String, CompletionError> {
        let api_key = credentials
            .get(Provider::Gemini)
            .ok_or(CompletionError::MissingCredential(Provider::Gemini))?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, COMPLETION_MODEL
        );

        // Gemini has no system role; the prompt is prepended to the
        // transcript in a single user turn.
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user".to_string(),
                parts: vec![Part {
                    text: format!("{}\n\n{}", prompt, transcript),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: SAMPLING_TEMPERATURE,
            },
        };

        tracing::debug!(
            model = COMPLETION_MODEL,
            prompt = %sanitize_excerpt(prompt),
            "Requesting Gemini completion"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| format!("status {}: {}", status, text));
            return Err(CompletionError::ProviderRejected(message));
        }

        let generated: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        generated
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| CompletionError::InvalidResponse("empty candidates".to_string()))
    }
}
