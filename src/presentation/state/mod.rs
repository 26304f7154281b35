mod app_state;
mod run_registry;

pub use app_state::AppState;
pub use run_registry::{RegistryProgress, RunProgress, RunRegistry, RunState};
