use std::sync::Arc;

use crate::domain::{SpeechProvider, TextProvider};

use super::completion_engine::CompletionEngine;
use super::transcription_engine::TranscriptionEngine;

/// Single dispatch point from a speech provider to its engine. Adding a
/// backend means adding a field here and a constructor argument; the pipeline
/// never branches on provider identity anywhere else.
pub struct SpeechEngineRegistry {
    openai: Arc<dyn TranscriptionEngine>,
    groq: Arc<dyn TranscriptionEngine>,
}

impl SpeechEngineRegistry {
    pub fn new(openai: Arc<dyn TranscriptionEngine>, groq: Arc<dyn TranscriptionEngine>) -> Self {
        Self { openai, groq }
    }

    pub fn engine(&self, provider: SpeechProvider) -> &Arc<dyn TranscriptionEngine> {
        match provider {
            SpeechProvider::OpenAi => &self.openai,
            SpeechProvider::Groq => &self.groq,
        }
    }
}

/// Single dispatch point from a text provider to its engine.
pub struct CompletionEngineRegistry {
    openai: Arc<dyn CompletionEngine>,
    gemini: Arc<dyn CompletionEngine>,
    groq: Arc<dyn CompletionEngine>,
}

impl CompletionEngineRegistry {
    pub fn new(
        openai: Arc<dyn CompletionEngine>,
        gemini: Arc<dyn CompletionEngine>,
        groq: Arc<dyn CompletionEngine>,
    ) -> Self {
        Self {
            openai,
            gemini,
            groq,
        }
    }

    pub fn engine(&self, provider: TextProvider) -> &Arc<dyn CompletionEngine> {
        match provider {
            TextProvider::OpenAi => &self.openai,
            TextProvider::Gemini => &self.gemini,
            TextProvider::Groq => &self.groq,
        }
    }
}
