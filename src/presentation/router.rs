use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    create_analysis_handler, delete_credential_handler, get_prompt_handler, get_report_handler,
    health_handler, list_credentials_handler, list_reports_handler, list_uploads_handler,
    run_status_handler, update_credential_handler, update_prompt_handler,
};
use crate::presentation::state::AppState;

/// Fits the 25 MiB file limit plus multipart framing; the pipeline enforces
/// the exact limit itself.
const BODY_LIMIT_BYTES: usize = 26 * 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/analyses", post(create_analysis_handler))
        .route("/api/v1/runs/{run_id}", get(run_status_handler))
        .route("/api/v1/reports", get(list_reports_handler))
        .route("/api/v1/reports/{report_id}", get(get_report_handler))
        .route("/api/v1/uploads", get(list_uploads_handler))
        .route(
            "/api/v1/prompts/{prompt_type}",
            get(get_prompt_handler).put(update_prompt_handler),
        )
        .route("/api/v1/credentials", get(list_credentials_handler))
        .route(
            "/api/v1/credentials/{provider}",
            put(update_credential_handler).delete(delete_credential_handler),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
