use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::audio_upload::UploadId;
use super::provider::TextProvider;

pub const SERVICE_EVALUATION_HEADING: &str = "Service Evaluation";
pub const CUSTOMER_INSIGHT_HEADING: &str = "Customer Insight";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportId(Uuid);

impl ReportId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

/// The assembled markdown report for one completed pipeline run. References
/// its upload by id only; immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightReport {
    pub id: ReportId,
    pub audio_upload_id: UploadId,
    pub content: String,
    pub provider_used: TextProvider,
    pub created_at: DateTime<Utc>,
}

impl InsightReport {
    pub fn new(audio_upload_id: UploadId, content: String, provider_used: TextProvider) -> Self {
        Self {
            id: ReportId::new(),
            audio_upload_id,
            content,
            provider_used,
            created_at: Utc::now(),
        }
    }
}

/// Assembles the two analysis results into the report document: the service
/// evaluation section always precedes the customer insight section.
pub fn render_markdown(service_evaluation: &str, customer_insight: &str) -> String {
    format!(
        "# {}\n{}\n\n# {}\n{}\n",
        SERVICE_EVALUATION_HEADING, service_evaluation, CUSTOMER_INSIGHT_HEADING, customer_insight
    )
}
