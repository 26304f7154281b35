use async_trait::async_trait;

use crate::application::ports::{CompletionEngine, CompletionError};
use crate::domain::{CredentialSet, Provider};
use crate::infrastructure::observability::sanitize_excerpt;

use super::openai_compatible::request_chat_completion;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const COMPLETION_MODEL: &str = "llama3-8b-8192";

/// Groq chat backend; speaks the OpenAI-compatible completion dialect.
pub struct GroqChatClient {
    client: reqwest::Client,
    base_url: String,
}

impl GroqChatClient {
    pub fn new(client: reqwest::Client, base_url: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

#[async_trait]
impl CompletionEngine for GroqChatClient {
    async fn complete(
        &self,
        transcript: &str,
        prompt: &str,
        credentials: &CredentialSet,
    ) -> Result<String, CompletionError> {
        let api_key = credentials
            .get(Provider::Groq)
            .ok_or(CompletionError::MissingCredential(Provider::Groq))?;

        tracing::debug!(
            model = COMPLETION_MODEL,
            prompt = %sanitize_excerpt(prompt),
            "Requesting Groq completion"
        );

        request_chat_completion(
            &self.client,
            &self.base_url,
            COMPLETION_MODEL,
            api_key,
            prompt,
            transcript,
        )
        .await
    }
}
