mod engine_factory;
mod groq_whisper_engine;
mod openai_whisper_engine;

pub use engine_factory::SpeechEngineFactory;
pub use groq_whisper_engine::GroqWhisperEngine;
pub use openai_whisper_engine::OpenAiWhisperEngine;
