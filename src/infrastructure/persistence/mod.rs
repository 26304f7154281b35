mod memory_database;
mod pg_credential_repository;
mod pg_pool;
mod pg_prompt_repository;
mod pg_report_repository;
mod pg_upload_repository;

pub use memory_database::MemoryDatabase;
pub use pg_credential_repository::PgCredentialRepository;
pub use pg_pool::create_pool;
pub use pg_prompt_repository::PgPromptRepository;
pub use pg_report_repository::PgReportRepository;
pub use pg_upload_repository::PgUploadRepository;

use crate::application::ports::RepositoryError;

pub(crate) fn query_err(e: sqlx::Error) -> RepositoryError {
    RepositoryError::QueryFailed(e.to_string())
}
