use async_trait::async_trait;

use crate::domain::{InsightReport, ReportId, UserId};

use super::repository_error::RepositoryError;

#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn create(&self, report: &InsightReport) -> Result<(), RepositoryError>;

    /// Ownership is resolved through the referenced upload; a report another
    /// user produced is indistinguishable from a missing one.
    async fn get_for_owner(
        &self,
        id: ReportId,
        owner: UserId,
    ) -> Result<Option<InsightReport>, RepositoryError>;

    /// Newest first.
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<InsightReport>, RepositoryError>;
}
