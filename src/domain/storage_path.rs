use std::fmt;

use super::user_id::UserId;

/// Object-storage location of an uploaded audio file, always scoped under the
/// owning user's prefix: `<owner_id>/<epoch_millis>_<sanitized_file_name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn for_upload(owner: UserId, file_name: &str, uploaded_at_millis: i64) -> Self {
        Self(format!(
            "{}/{}_{}",
            owner.as_uuid(),
            uploaded_at_millis,
            sanitize_file_name(file_name)
        ))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replaces every character outside `[A-Za-z0-9.-]` with an underscore so the
/// name is safe as an object key segment.
fn sanitize_file_name(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
