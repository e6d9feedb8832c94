//! Connection to the PHP backend.

use async_trait::async_trait;
use axum::body::Bytes;
use std::time::Duration;

use super::error::GatewayError;

/// One forwarded call: `POST {base}/{endpoint}` with the console's body
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub endpoint: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[async_trait]
pub trait Upstream: Send + Sync {
    async fn forward(&self, request: UpstreamRequest) -> Result<UpstreamResponse, GatewayError>;

    /// Where requests go, for logs
    fn base_url(&self) -> &str;
}

/// reqwest-backed upstream
pub struct PhpUpstream {
    client: reqwest::Client,
    base_url: String,
}

impl PhpUpstream {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl Upstream for PhpUpstream {
    async fn forward(&self, request: UpstreamRequest) -> Result<UpstreamResponse, GatewayError> {
        let mut builder = self.client.post(self.url_for(&request.endpoint));
        if let Some(content_type) = &request.content_type {
            builder = builder.header(reqwest::header::CONTENT_TYPE, content_type);
        }

        let response = builder.body(request.body).send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else {
                GatewayError::Upstream(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Upstream(e.to_string()))?;

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_endpoint() {
        let upstream = PhpUpstream::new("http://php.local/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(upstream.base_url(), "http://php.local/api");
        assert_eq!(upstream.url_for("getMyBank.php"), "http://php.local/api/getMyBank.php");
    }
}
