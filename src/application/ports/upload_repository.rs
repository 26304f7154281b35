use async_trait::async_trait;

use crate::domain::{AudioUpload, UploadId, UserId};

use super::repository_error::RepositoryError;

#[async_trait]
pub trait UploadRepository: Send + Sync {
    async fn create(&self, upload: &AudioUpload) -> Result<(), RepositoryError>;

    async fn get(&self, id: UploadId) -> Result<Option<AudioUpload>, RepositoryError>;

    /// Newest first.
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<AudioUpload>, RepositoryError>;
}
