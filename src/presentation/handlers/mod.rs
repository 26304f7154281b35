mod analyses;
mod credentials;
mod health;
mod prompts;
mod reports;
mod runs;
mod uploads;

pub use analyses::create_analysis_handler;
pub use credentials::{
    delete_credential_handler, list_credentials_handler, update_credential_handler,
};
pub use health::health_handler;
pub use prompts::{get_prompt_handler, update_prompt_handler};
pub use reports::{get_report_handler, list_reports_handler};
pub use runs::run_status_handler;
pub use uploads::list_uploads_handler;

use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
