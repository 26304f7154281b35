use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use bytes::Bytes;
use chrono::Utc;
use futures::TryStreamExt;

use crate::application::ports::{
    AudioStore, AudioStoreError, CompletionEngineRegistry, CompletionError, CredentialRepository,
    ProgressSink, PromptRepository, ReportRepository, RepositoryError, SpeechEngineRegistry,
    TranscriptionError, UploadRepository,
};
use crate::domain::{
    AudioFile, AudioUpload, InsightReport, PromptKind, PromptTemplate, Provider, SpeechProvider,
    StoragePath, TextProvider, UserId, render_markdown,
};

pub const MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;

const UPLOAD_CHUNK_BYTES: usize = 64 * 1024;

const STAGE_UPLOADING: &str = "uploading audio file";
const STAGE_TRANSCRIBING: &str = "transcribing audio";
const STAGE_SERVICE_EVALUATION: &str = "evaluating service quality";
const STAGE_CUSTOMER_INSIGHT: &str = "analyzing customer insight";
const STAGE_SAVING: &str = "saving report";
const STAGE_DONE: &str = "report ready";

/// Per-run selection: who is uploading and which backends to use. A missing
/// owner means the caller never authenticated.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    pub owner: Option<UserId>,
    pub speech_provider: SpeechProvider,
    pub text_provider: TextProvider,
}

/// Orchestrates one upload-to-report run: validate, store raw bytes, record
/// metadata, transcribe, run both analyses, persist the report.
pub struct AnalysisService {
    audio_store: Arc<dyn AudioStore>,
    uploads: Arc<dyn UploadRepository>,
    reports: Arc<dyn ReportRepository>,
    prompts: Arc<dyn PromptRepository>,
    credentials: Arc<dyn CredentialRepository>,
    speech: SpeechEngineRegistry,
    text: CompletionEngineRegistry,
}

impl AnalysisService {
    pub fn new(
        audio_store: Arc<dyn AudioStore>,
        uploads: Arc<dyn UploadRepository>,
        reports: Arc<dyn ReportRepository>,
        prompts: Arc<dyn PromptRepository>,
        credentials: Arc<dyn CredentialRepository>,
        speech: SpeechEngineRegistry,
        text: CompletionEngineRegistry,
    ) -> Self {
        Self {
            audio_store,
            uploads,
            reports,
            prompts,
            credentials,
            speech,
            text,
        }
    }

    /// Runs the full pipeline. Preconditions are checked in a fixed order
    /// before any byte is stored; each failure is a hard stop. Steps already
    /// completed when a later step fails are not rolled back: the stored
    /// audio object and its metadata row survive a failed transcription or
    /// analysis.
    pub async fn run(
        &self,
        file: Option<AudioFile>,
        config: RunConfig,
        sink: &dyn ProgressSink,
    ) -> Result<InsightReport, AnalysisError> {
        let owner = config.owner.ok_or(AnalysisError::Unauthenticated)?;

        let service_prompt = self.active_prompt(PromptKind::ServiceEvaluation).await?;
        let insight_prompt = self.active_prompt(PromptKind::CustomerInsight).await?;

        let file = file.ok_or(AnalysisError::NoFileSelected)?;
        if file.size_bytes() > MAX_UPLOAD_BYTES {
            return Err(AnalysisError::FileTooLarge {
                size_bytes: file.size_bytes(),
            });
        }

        let credentials = self.credentials.credentials_for_owner(owner).await?;

        let speech_credential = config.speech_provider.credential_provider();
        if !credentials.contains(speech_credential) {
            return Err(AnalysisError::MissingCredential(speech_credential));
        }
        if config.speech_provider == SpeechProvider::Groq && !credentials.contains(Provider::OpenAi)
        {
            // Groq transcription is routed through the OpenAI endpoint, so
            // the OpenAI key must be on file even when Groq is selected.
            return Err(AnalysisError::MissingCredential(Provider::OpenAi));
        }
        let text_credential = config.text_provider.credential_provider();
        if !credentials.contains(text_credential) {
            return Err(AnalysisError::MissingCredential(text_credential));
        }

        let progress = Progress::new(sink);
        progress.report(0, STAGE_UPLOADING);

        let uploaded_at = Utc::now();
        let path = StoragePath::for_upload(owner, &file.file_name, uploaded_at.timestamp_millis());

        self.store_audio(&file, &path, &progress).await?;

        let upload = AudioUpload::new(owner, path);
        self.uploads.create(&upload).await?;

        progress.report(30, STAGE_TRANSCRIBING);
        let engine = self.speech.engine(config.speech_provider);
        let transcript = engine.transcribe(&file, &credentials).await?;
        tracing::info!(
            upload_id = %upload.id.as_uuid(),
            provider = %config.speech_provider,
            chars = transcript.len(),
            "Transcription completed"
        );

        let engine = self.text.engine(config.text_provider);

        progress.report(60, STAGE_SERVICE_EVALUATION);
        let service_evaluation = engine
            .complete(&transcript, &service_prompt.text, &credentials)
            .await
            .map_err(|source| AnalysisError::Completion {
                kind: PromptKind::ServiceEvaluation,
                source,
            })?;

        progress.report(70, STAGE_CUSTOMER_INSIGHT);
        let customer_insight = engine
            .complete(&transcript, &insight_prompt.text, &credentials)
            .await
            .map_err(|source| AnalysisError::Completion {
                kind: PromptKind::CustomerInsight,
                source,
            })?;

        progress.report(80, STAGE_SAVING);
        let content = render_markdown(&service_evaluation, &customer_insight);
        let report = InsightReport::new(upload.id, content, config.text_provider);
        self.reports.create(&report).await?;

        tracing::info!(
            report_id = %report.id.as_uuid(),
            upload_id = %upload.id.as_uuid(),
            provider = %config.text_provider,
            "Insight report persisted"
        );
        progress.report(100, STAGE_DONE);

        Ok(report)
    }

    /// The active template for the kind; a missing or blank template is a
    /// configuration failure. Templates are re-read on every run so operator
    /// edits take effect immediately.
    async fn active_prompt(&self, kind: PromptKind) -> Result<PromptTemplate, AnalysisError> {
        self.prompts
            .get(kind)
            .await?
            .filter(|template| !template.is_empty())
            .ok_or(AnalysisError::MissingConfiguration(kind))
    }

    /// Streams the raw bytes into object storage in fixed-size chunks,
    /// reporting up to the 50% checkpoint proportional to bytes transferred.
    async fn store_audio(
        &self,
        file: &AudioFile,
        path: &StoragePath,
        progress: &Progress<'_>,
    ) -> Result<(), AnalysisError> {
        let len = file.bytes.len();
        let total = len.max(1);
        let mut sent = 0usize;

        let chunks: Vec<Bytes> = (0..len)
            .step_by(UPLOAD_CHUNK_BYTES)
            .map(|offset| file.bytes.slice(offset..(offset + UPLOAD_CHUNK_BYTES).min(len)))
            .collect();

        let stream = futures::stream::iter(chunks.into_iter().map(Ok::<_, io::Error>))
            .inspect_ok(|chunk| {
                sent += chunk.len();
                progress.report(((sent * 50) / total) as u8, STAGE_UPLOADING);
            });

        self.audio_store
            .put(path, Box::pin(stream), Some(len as u64))
            .await?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("not signed in")]
    Unauthenticated,
    #[error("the {0} prompt is not configured")]
    MissingConfiguration(PromptKind),
    #[error("file exceeds the 25 MiB upload limit")]
    FileTooLarge { size_bytes: u64 },
    #[error("no file selected")]
    NoFileSelected,
    #[error("no {0} API key is configured")]
    MissingCredential(Provider),
    #[error("storage: {0}")]
    Storage(#[from] AudioStoreError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("{kind} analysis: {source}")]
    Completion {
        kind: PromptKind,
        #[source]
        source: CompletionError,
    },
    #[error("persistence: {0}")]
    Persistence(#[from] RepositoryError),
}

/// Wraps the caller's sink and clamps each report to the running maximum, so
/// observed percentages never decrease even though the fixed checkpoints
/// (up to 50 during storage, then a flat 30 on completion) are not monotone.
struct Progress<'a> {
    sink: &'a dyn ProgressSink,
    high_water: AtomicU8,
}

impl<'a> Progress<'a> {
    fn new(sink: &'a dyn ProgressSink) -> Self {
        Self {
            sink,
            high_water: AtomicU8::new(0),
        }
    }

    fn report(&self, percent: u8, stage: &str) {
        let previous = self.high_water.fetch_max(percent, Ordering::Relaxed);
        self.sink.report(previous.max(percent), stage);
    }
}
