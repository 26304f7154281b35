mod audio_file;
mod audio_upload;
mod credential;
mod prompt;
mod provider;
mod report;
mod storage_path;
mod user_id;

pub use audio_file::AudioFile;
pub use audio_upload::{AudioUpload, UploadId};
pub use credential::CredentialSet;
pub use prompt::{PromptKind, PromptTemplate};
pub use provider::{Provider, SpeechProvider, TextProvider};
pub use report::{
    CUSTOMER_INSIGHT_HEADING, InsightReport, ReportId, SERVICE_EVALUATION_HEADING, render_markdown,
};
pub use storage_path::StoragePath;
pub use user_id::UserId;
