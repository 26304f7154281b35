use std::sync::Arc;

use crate::application::ports::SpeechEngineRegistry;
use crate::presentation::config::SpeechSettings;

use super::groq_whisper_engine::GroqWhisperEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

pub struct SpeechEngineFactory;

impl SpeechEngineFactory {
    pub fn create(client: reqwest::Client, settings: &SpeechSettings) -> SpeechEngineRegistry {
        SpeechEngineRegistry::new(
            Arc::new(OpenAiWhisperEngine::new(
                client.clone(),
                settings.base_url.clone(),
            )),
            Arc::new(GroqWhisperEngine::new(client, settings.base_url.clone())),
        )
    }
}
