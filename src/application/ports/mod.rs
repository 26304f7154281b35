mod audio_store;
mod completion_engine;
mod credential_repository;
mod engine_registry;
mod progress_sink;
mod prompt_repository;
mod report_repository;
mod repository_error;
mod transcription_engine;
mod upload_repository;

pub use audio_store::{AudioStore, AudioStoreError};
pub use completion_engine::{CompletionEngine, CompletionError};
pub use credential_repository::CredentialRepository;
pub use engine_registry::{CompletionEngineRegistry, SpeechEngineRegistry};
pub use progress_sink::{NoopProgressSink, ProgressSink};
pub use prompt_repository::PromptRepository;
pub use report_repository::ReportRepository;
pub use repository_error::RepositoryError;
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use upload_repository::UploadRepository;
