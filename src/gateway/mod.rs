//! HTTP gateway (Axum) in front of the matcher and the fallback provider.
//!
//! This module is primarily used by the `faqroute` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;

#[cfg(test)]
mod handler_tests;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, header, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::chat_handler;
pub use state::HandlerState;

use crate::constants::{
    FAQROUTE_SOURCE_HEADER, FAQROUTE_STATUS_HEALTHY, FAQROUTE_STATUS_NOT_READY,
    FAQROUTE_STATUS_READY,
};
use crate::hashing::format_fingerprint;

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/v1/chat", post(chat_handler).fallback(method_not_allowed))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// JSON 405 for any non-POST request on the chat route.
async fn method_not_allowed() -> GatewayError {
    GatewayError::MethodNotAllowed
}

/// Browsers may call the chat endpoint from any origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub corpus: CorpusStatus,
    pub provider: &'static str,
}

#[derive(serde::Serialize)]
pub struct CorpusStatus {
    pub entries: usize,
    pub fingerprint: String,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        FAQROUTE_SOURCE_HEADER,
        HeaderValue::from_static(FAQROUTE_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Response {
    let is_ready = !state.corpus.is_empty();

    let (status_code, status_msg, header_value) = if is_ready {
        (StatusCode::OK, "ok", FAQROUTE_STATUS_READY)
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "empty_corpus",
            FAQROUTE_STATUS_NOT_READY,
        )
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        FAQROUTE_SOURCE_HEADER,
        HeaderValue::from_static(header_value),
    );

    (
        status_code,
        headers,
        Json(ReadyResponse {
            status: status_msg,
            corpus: CorpusStatus {
                entries: state.corpus.len(),
                fingerprint: format_fingerprint(state.corpus.fingerprint()),
            },
            provider: state.provider.name(),
        }),
    )
        .into_response()
}
