mod engine_factory;
mod gemini_client;
mod groq_chat_client;
mod openai_chat_client;
mod openai_compatible;

pub use engine_factory::CompletionEngineFactory;
pub use gemini_client::GeminiClient;
pub use groq_chat_client::GroqChatClient;
pub use openai_chat_client::OpenAiChatClient;

/// Fixed sampling temperature shared by every completion backend.
pub const SAMPLING_TEMPERATURE: f32 = 0.7;
