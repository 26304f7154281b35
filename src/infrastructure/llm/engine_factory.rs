use std::sync::Arc;

use crate::application::ports::CompletionEngineRegistry;
use crate::presentation::config::LlmSettings;

use super::gemini_client::GeminiClient;
use super::groq_chat_client::GroqChatClient;
use super::openai_chat_client::OpenAiChatClient;

pub struct CompletionEngineFactory;

impl CompletionEngineFactory {
    pub fn create(client: reqwest::Client, settings: &LlmSettings) -> CompletionEngineRegistry {
        CompletionEngineRegistry::new(
            Arc::new(OpenAiChatClient::new(
                client.clone(),
                settings.openai_base_url.clone(),
            )),
            Arc::new(GeminiClient::new(
                client.clone(),
                settings.gemini_base_url.clone(),
            )),
            Arc::new(GroqChatClient::new(client, settings.groq_base_url.clone())),
        )
    }
}
