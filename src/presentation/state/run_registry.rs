use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::ProgressSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Running,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunProgress {
    pub percent: u8,
    pub stage: String,
    pub state: RunState,
}

/// Progress of in-flight pipeline runs, keyed by run id, so the browser can
/// poll while its upload request is still open. Entries are kept after
/// completion; the registry lives only as long as the process.
#[derive(Default)]
pub struct RunRegistry {
    runs: Mutex<HashMap<Uuid, RunProgress>>,
}

impl RunRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, RunProgress>> {
        self.runs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn begin(&self, run_id: Uuid) {
        self.lock().insert(
            run_id,
            RunProgress {
                percent: 0,
                stage: "starting".to_string(),
                state: RunState::Running,
            },
        );
    }

    pub fn update(&self, run_id: Uuid, percent: u8, stage: &str) {
        if let Some(progress) = self.lock().get_mut(&run_id) {
            progress.percent = percent;
            progress.stage = stage.to_string();
        }
    }

    pub fn finish(&self, run_id: Uuid, state: RunState, stage: &str) {
        if let Some(progress) = self.lock().get_mut(&run_id) {
            progress.state = state;
            progress.stage = stage.to_string();
        }
    }

    pub fn get(&self, run_id: Uuid) -> Option<RunProgress> {
        self.lock().get(&run_id).cloned()
    }
}

/// Bridges the pipeline's progress callbacks into the registry entry for one
/// run.
pub struct RegistryProgress {
    registry: Arc<RunRegistry>,
    run_id: Uuid,
}

impl RegistryProgress {
    pub fn new(registry: Arc<RunRegistry>, run_id: Uuid) -> Self {
        Self { registry, run_id }
    }
}

impl ProgressSink for RegistryProgress {
    fn report(&self, percent: u8, stage: &str) {
        self.registry.update(self.run_id, percent, stage);
    }
}
