//! Transport for the PHP endpoints.
//!
//! Every call goes through [`post_form`] or [`post_json`] and comes back as
//! `Result<ApiResult<T>, ApiError>`: transport and HTTP failures are `Err`,
//! a backend "status != ok" is `Ok(ApiResult::Failed)`.

use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::{ApiResult, DataEncoding, RawEnvelope};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::endpoint_url;

/// Legacy endpoints read `$_POST`, so most calls are form-encoded
pub async fn post_form<B, T>(endpoint: &str, body: &B) -> Result<ApiResult<T>, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let form = serde_qs::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let request = Request::post(&endpoint_url(endpoint))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_envelope(endpoint, response).await
}

/// Newer endpoints read a JSON body
pub async fn post_json<B, T>(endpoint: &str, body: &B) -> Result<ApiResult<T>, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = Request::post(&endpoint_url(endpoint))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_envelope(endpoint, response).await
}

async fn read_envelope<T: DeserializeOwned>(
    endpoint: &str,
    response: Response,
) -> Result<ApiResult<T>, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_http(status, &body);
        log::error!("{} responded with HTTP {}: {}", endpoint, status, err);
        return Err(err);
    }

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let envelope = RawEnvelope::parse(&body)?;
    if let Ok((_, DataEncoding::DoubleEncoded)) = envelope.decoded_data() {
        log::warn!("{} returned a double-encoded data payload", endpoint);
    }

    envelope.into_result::<T>().map_err(|e| {
        log::error!("{}: {}", endpoint, e);
        ApiError::from(e)
    })
}

/// Action endpoints: only whether it worked and the backend message matter
pub type ActionResult = Result<ApiResult<serde_json::Value>, ApiError>;
