//! `POST /api/<name>.php` -> `{upstream}/<name>.php`
//!
//! Bodies and content types pass through untouched. JSON answers are peeked
//! at so a double-encoded `data` field shows up in the gateway log with the
//! endpoint that produced it.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use contracts::shared::envelope::{DataEncoding, RawEnvelope};

use crate::shared::error::GatewayError;
use crate::shared::upstream::{Upstream, UpstreamRequest};

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn Upstream>,
}

/// Only plain `name.php` file names are forwarded
pub fn validate_endpoint(endpoint: &str) -> Result<&str, GatewayError> {
    let Some(stem) = endpoint.strip_suffix(".php") else {
        return Err(GatewayError::InvalidEndpoint(endpoint.to_string()));
    };
    let valid = !stem.is_empty()
        && stem
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(endpoint)
    } else {
        Err(GatewayError::InvalidEndpoint(endpoint.to_string()))
    }
}

/// Encoding of the envelope's `data` field, `None` when the body is not an envelope
pub fn inspect_envelope(body: &[u8]) -> Option<DataEncoding> {
    let text = std::str::from_utf8(body).ok()?;
    let envelope = RawEnvelope::parse(text).ok()?;
    envelope.decoded_data().ok().map(|(_, encoding)| encoding)
}

pub async fn forward(
    State(state): State<AppState>,
    Path(endpoint): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let endpoint = validate_endpoint(&endpoint)?.to_string();
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    tracing::debug!("forwarding {} ({} bytes) to {}", endpoint, body.len(), state.upstream.base_url());

    let upstream = state
        .upstream
        .forward(UpstreamRequest {
            endpoint: endpoint.clone(),
            content_type,
            body,
        })
        .await?;

    if matches!(inspect_envelope(&upstream.body), Some(DataEncoding::DoubleEncoded)) {
        tracing::warn!("{} returned a double-encoded data payload", endpoint);
    }
    if upstream.status >= 500 {
        tracing::error!("{} answered with status {}", endpoint, upstream.status);
    }

    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = (status, upstream.body).into_response();
    if let Some(value) = upstream.content_type.and_then(|ct| HeaderValue::from_str(&ct).ok()) {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::upstream::UpstreamResponse;
    use async_trait::async_trait;
    use axum::body::to_bytes;
    use std::sync::Mutex;

    /// Records what it was asked and answers with a canned body
    struct FakeUpstream {
        seen: Mutex<Vec<UpstreamRequest>>,
        answer: Result<(u16, &'static str), ()>,
    }

    impl FakeUpstream {
        fn answering(status: u16, body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
                answer: Ok((status, body)),
            })
        }

        fn down() -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
                answer: Err(()),
            })
        }
    }

    #[async_trait]
    impl Upstream for FakeUpstream {
        async fn forward(&self, request: UpstreamRequest) -> Result<UpstreamResponse, GatewayError> {
            self.seen.lock().unwrap().push(request);
            match self.answer {
                Ok((status, body)) => Ok(UpstreamResponse {
                    status,
                    content_type: Some("application/json".into()),
                    body: Bytes::from_static(body.as_bytes()),
                }),
                Err(()) => Err(GatewayError::Upstream("connection refused".into())),
            }
        }

        fn base_url(&self) -> &str {
            "fake://php"
        }
    }

    fn form_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers
    }

    #[test]
    fn test_validate_endpoint() {
        assert!(validate_endpoint("GetDepositPendingList.php").is_ok());
        assert!(validate_endpoint("withdrawList_checkAutomation.php").is_ok());
        assert!(validate_endpoint("cp-credit.php").is_ok());
        for bad in ["", ".php", "getMyBank", "../etc/passwd.php", "a/b.php", "x.php.bak", "a b.php"] {
            assert!(validate_endpoint(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_inspect_envelope() {
        let double = br#"{"status":"ok","data":"[{\"futuretrxid\":\"1\"}]"}"#;
        let plain = br#"{"status":"ok","records":[]}"#;
        assert_eq!(inspect_envelope(double), Some(DataEncoding::DoubleEncoded));
        assert_eq!(inspect_envelope(plain), Some(DataEncoding::Absent));
        assert_eq!(inspect_envelope(b"<html>"), None);
    }

    #[tokio::test]
    async fn test_forward_passes_body_and_content_type() {
        let fake = FakeUpstream::answering(200, r#"{"status":"ok","records":[]}"#);
        let state = AppState { upstream: fake.clone() };

        let response = forward(
            State(state),
            Path("getMyBank.php".to_string()),
            form_headers(),
            Bytes::from_static(b"bank=BCA"),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"status":"ok","records":[]}"#);

        let seen = fake.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].endpoint, "getMyBank.php");
        assert_eq!(seen[0].content_type.as_deref(), Some("application/x-www-form-urlencoded"));
        assert_eq!(&seen[0].body[..], b"bank=BCA");
    }

    #[tokio::test]
    async fn test_upstream_status_is_kept() {
        let fake = FakeUpstream::answering(500, r#"{"status":"error","message":"db down"}"#);
        let response = forward(
            State(AppState { upstream: fake }),
            Path("getSmsList.php".to_string()),
            HeaderMap::new(),
            Bytes::new(),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_rejects_unknown_endpoint_without_calling_upstream() {
        let fake = FakeUpstream::answering(200, "{}");
        let result = forward(
            State(AppState { upstream: fake.clone() }),
            Path("..%2Fadmin.php".to_string()),
            HeaderMap::new(),
            Bytes::new(),
        )
        .await;
        assert!(matches!(result, Err(GatewayError::InvalidEndpoint(_))));
        assert!(fake.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_upstream_maps_to_bad_gateway() {
        let result = forward(
            State(AppState { upstream: FakeUpstream::down() }),
            Path("getCrawlerStatus.php".to_string()),
            HeaderMap::new(),
            Bytes::new(),
        )
        .await;
        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
