mod analysis_service;

pub use analysis_service::{AnalysisError, AnalysisService, MAX_UPLOAD_BYTES, RunConfig};
