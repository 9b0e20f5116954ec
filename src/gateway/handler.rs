use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, info, instrument};

use crate::constants::FAQROUTE_SOURCE_HEADER;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::ChatReply;
use crate::gateway::state::HandlerState;

/// Answers from the knowledge base when it can, from the provider otherwise.
///
/// The provider is only called after the matcher has missed, so a qualifying
/// local answer can never be replaced by a generated one.
#[instrument(skip(state, request), fields(source = tracing::field::Empty))]
pub async fn chat_handler(
    State(state): State<HandlerState>,
    request: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Json(request) = request.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let message = extract_message(&request)?;

    let (matched, outcome) = state
        .matcher
        .find_best_match_with_outcome(message, &state.corpus);
    let source = outcome.to_answer_source();
    tracing::Span::current().record("source", tracing::field::display(source));

    if let Some(result) = matched {
        info!(
            id = %result.entry.id,
            score = result.score,
            "Knowledge base hit"
        );
        return Ok(make_response(ChatReply::from_match(&result)));
    }

    debug!(
        outcome = %outcome,
        provider = state.provider.name(),
        "Knowledge base miss - calling provider"
    );

    let reply = state.provider.generate(message).await?;
    Ok(make_response(ChatReply::generative(reply)))
}

pub(crate) fn make_response(reply: ChatReply) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        FAQROUTE_SOURCE_HEADER,
        HeaderValue::from_static(reply.source.as_header_value()),
    );
    (StatusCode::OK, headers, Json(reply)).into_response()
}

pub(crate) fn extract_message(req: &serde_json::Value) -> Result<&str, GatewayError> {
    match req.get("message").and_then(|m| m.as_str()) {
        Some(message) if !message.is_empty() => Ok(message),
        _ => Err(GatewayError::InvalidRequest(
            "`message` (string) is required".to_string(),
        )),
    }
}
