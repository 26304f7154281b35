/// Receives `(percent, stage)` checkpoints as a pipeline run advances.
pub trait ProgressSink: Send + Sync {
    fn report(&self, percent: u8, stage: &str);
}

/// Sink for callers that do not observe progress.
pub struct NoopProgressSink;

impl ProgressSink for NoopProgressSink {
    fn report(&self, _percent: u8, _stage: &str) {}
}
