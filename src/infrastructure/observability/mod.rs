mod init_tracing;
mod log_sanitizer;
mod request_id;

pub use init_tracing::{TracingConfig, init_tracing};
pub use log_sanitizer::sanitize_excerpt;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
