use thiserror::Error;

use super::envelope::{EnvelopeError, RawEnvelope};
use super::validation::ValidationError;

/// Every way a call to a backend endpoint can fail, as seen by a screen
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (network down, CORS, aborted)
    #[error("network error: {0}")]
    Transport(String),

    /// Non-2xx HTTP status, with the envelope message when the body had one
    #[error("{}", describe_http(.status, .message))]
    Http { status: u16, message: Option<String> },

    /// Body was not the expected JSON shape
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Blocked before any request was sent
    #[error("{0}")]
    Validation(String),
}

fn describe_http(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.to_string(),
        None => format!("server responded with HTTP {status}"),
    }
}

impl ApiError {
    /// Error for a non-2xx response. The gateway and PHP both answer failures
    /// with the usual `{status, message}` envelope; its message is kept.
    pub fn from_http(status: u16, body: &str) -> Self {
        let message = RawEnvelope::parse(body)
            .ok()
            .and_then(|envelope| envelope.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
        ApiError::Http { status, message }
    }

    /// Title shown on the notification for this error
    pub fn title(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "Validation",
            _ => "Error",
        }
    }
}

impl From<EnvelopeError> for ApiError {
    fn from(e: EnvelopeError) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_keeps_gateway_message() {
        let err = ApiError::from_http(
            504,
            r#"{"status":"error","message":"Backend did not answer in time"}"#,
        );
        assert_eq!(
            err,
            ApiError::Http {
                status: 504,
                message: Some("Backend did not answer in time".into()),
            }
        );
        assert_eq!(err.to_string(), "Backend did not answer in time");
        assert_eq!(err.title(), "Error");
    }

    #[test]
    fn test_http_error_without_envelope() {
        for body in ["<html>502 Bad Gateway</html>", "", r#"{"status":"error","message":"  "}"#] {
            let err = ApiError::from_http(502, body);
            assert_eq!(err.to_string(), "server responded with HTTP 502", "{body}");
        }
    }
}
