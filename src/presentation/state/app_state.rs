use std::sync::Arc;

use crate::application::ports::{
    CredentialRepository, PromptRepository, ReportRepository, UploadRepository,
};
use crate::application::services::AnalysisService;

use super::run_registry::RunRegistry;

#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
    pub uploads: Arc<dyn UploadRepository>,
    pub reports: Arc<dyn ReportRepository>,
    pub prompts: Arc<dyn PromptRepository>,
    pub credentials: Arc<dyn CredentialRepository>,
    pub runs: Arc<RunRegistry>,
}
