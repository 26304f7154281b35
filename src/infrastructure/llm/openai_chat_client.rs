use async_trait::async_trait;

use crate::application::ports::{CompletionEngine, CompletionError};
use crate::domain::{CredentialSet, Provider};
use crate::infrastructure::observability::sanitize_excerpt;

use super::openai_compatible::request_chat_completion;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const COMPLETION_MODEL: &str = "gpt-4o";

pub struct OpenAiChatClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenAiChatClient {
    pub fn new(client: reqwest::Client, base_url: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

#[async_trait]
impl CompletionEngine for OpenAiChatClient {
    async fn complete(
        &self,
        transcript: &str,
        prompt: &str,
        credentials: &CredentialSet,
    ) -> Result<String, CompletionError> {
        let api_key = credentials
            .get(Provider::OpenAi)
            .ok_or(CompletionError::MissingCredential(Provider::OpenAi))?;

        tracing::debug!(
            model = COMPLETION_MODEL,
            prompt = %sanitize_excerpt(prompt),
            "Requesting OpenAI completion"
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
