use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::constants::FAQROUTE_SOURCE_HEADER;
use crate::provider::ProviderError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("provider not configured: {0}")]
    ProviderNotConfigured(String),

    #[error("provider error: {0}")]
    ProviderError(String),

    #[error("Use POST")]
    MethodNotAllowed,
}

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingCredentials { .. } => {
                GatewayError::ProviderNotConfigured(err.to_string())
            }
            ProviderError::Upstream(_) => {
                GatewayError::ProviderError("Upstream service request failed".to_string())
            }
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, status_label) = match &self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::ProviderNotConfigured(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "provider_not_configured",
            ),
            GatewayError::ProviderError(_) => (StatusCode::BAD_GATEWAY, "provider_error"),
            GatewayError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed")
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            FAQROUTE_SOURCE_HEADER,
            HeaderValue::from_static(status_label),
        );
        if status == StatusCode::METHOD_NOT_ALLOWED {
            headers.insert(header::ALLOW, HeaderValue::from_static("POST"));
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
