use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Failures of the gateway itself. The body keeps the PHP envelope shape so
/// the console shows the message like any other backend error.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Unknown endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Backend did not answer in time")]
    Timeout,

    #[error("Backend unreachable: {0}")]
    Upstream(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidEndpoint(_) => StatusCode::NOT_FOUND,
            GatewayError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        tracing::warn!("gateway error: {}", self);
        let body = serde_json::json!({
            "status": "error",
            "message": self.to_string(),
        });
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(GatewayError::InvalidEndpoint("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(GatewayError::Timeout.status_code(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            GatewayError::Upstream("refused".into()).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
