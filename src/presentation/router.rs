use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analysis_messages_handler, create_threat_scan_handler, get_analysis_handler, health_handler,
    list_analyses_handler, list_threat_scans_handler, trigger_handler, upload_handler,
    voice_assistant_handler,
};
use crate::presentation::state::AppState;

/// Headroom for multipart framing on top of the file size limit.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = usize::try_from(state.upload_service.policy().max_size_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/v1/analyses",
            post(upload_handler).get(list_analyses_handler),
        )
        .route("/api/v1/analyses/trigger", post(trigger_handler))
        .route("/api/v1/analyses/{analysis_id}", get(get_analysis_handler))
        .route(
            "/api/v1/analyses/{analysis_id}/messages",
            get(analysis_messages_handler),
        )
        .route(
            "/api/v1/threat-scans",
            post(create_threat_scan_handler).get(list_threat_scans_handler),
        )
        .route("/api/v1/voice-assistant", post(voice_assistant_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(trace_layer)
        .layer(cors)
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
