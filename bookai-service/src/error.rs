//! Request-path error type.
//!
//! Every failure a route can produce is translated into one of these
//! categories and rendered as the `{success: false, message}` envelope the
//! frontend expects. Category changes the message text, never the envelope.

use crate::services::providers::ProviderError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Cliente API não inicializado. Chave ausente ou inválida.")]
    ClientUnavailable,

    #[error("Erro na API Gemini: {0}")]
    Upstream(String),

    #[error("Erro interno do servidor: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured(_) => ApiError::ClientUnavailable,
            ProviderError::ApiError(msg) => ApiError::Upstream(msg),
            ProviderError::NetworkError(msg) => ApiError::Upstream(msg),
            ProviderError::RateLimited => {
                ApiError::Upstream("quota esgotada (rate limited)".to_string())
            }
            ProviderError::ContentFiltered => {
                ApiError::Upstream("conteúdo bloqueado pelos filtros de segurança".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorBody {
            success: bool,
            message: String,
        }

        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ClientUnavailable | ApiError::Upstream(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            success: false,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_map_to_upstream_messages() {
        let err: ApiError = ProviderError::ApiError("boom".to_string()).into();
        assert!(matches!(err, ApiError::Upstream(ref m) if m == "boom"));

        let err: ApiError = ProviderError::NotConfigured("no key".to_string()).into();
        assert!(matches!(err, ApiError::ClientUnavailable));

        let err: ApiError = ProviderError::RateLimited.into();
        assert!(!err.to_string().is_empty());
    }
}
