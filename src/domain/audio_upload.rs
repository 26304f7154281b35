use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::storage_path::StoragePath;
use super::user_id::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadId(Uuid);

impl UploadId {
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

impl Default for UploadId {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata row for one stored audio file. Created once per successful upload
/// and immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioUpload {
    pub id: UploadId,
    pub owner_id: UserId,
    pub storage_path: StoragePath,
    pub duration_seconds: i32,
    pub created_at: DateTime<Utc>,
}

impl AudioUpload {
    pub fn new(owner_id: UserId, storage_path: StoragePath) -> Self {
        Self {
            id: UploadId::new(),
            owner_id,
            storage_path,
            // TODO: derive the duration from the audio container once a
            // decoder is wired in; recorded as zero until then.
            duration_seconds: 0,
            created_at: Utc::now(),
        }
    }
}
