use bytes::Bytes;

/// A single uploaded audio file, held in memory for the duration of one
/// pipeline run.
#[derive(Debug, Clone)]
pub struct AudioFile {
    pub file_name: String,
    pub bytes: Bytes,
}

impl AudioFile {
    pub fn new(file_name: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}
