//! Response envelope returned by the PHP endpoints.
//!
//! The backend is loose about the shape: `status` comes as `"ok"`, `"OK"`,
//! `"success"`, `"Y"`, a boolean or a number; rows arrive in `records` or in
//! `data`, and some endpoints put a JSON *string* into `data` that has to be
//! parsed a second time. Everything is normalized here, once, into
//! [`ApiResult`] so screens never look at raw status strings.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed. Please try again.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvelopeError {
    #[error("response is not valid JSON: {0}")]
    Json(String),

    #[error("double-encoded data is not valid JSON: {0}")]
    DoubleEncoded(String),

    #[error("record does not match the expected shape: {0}")]
    Record(String),
}

/// How the `data` field was delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataEncoding {
    Absent,
    Plain,
    /// A JSON string holding JSON; a backend defect worth logging
    DoubleEncoded,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawEnvelope {
    #[serde(default, deserialize_with = "status_as_string")]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub records: Option<Value>,
    #[serde(default)]
    pub data: Option<Value>,
}

fn status_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Maps the backend's many spellings of success onto a bool
pub fn normalize_status(status: &str) -> bool {
    matches!(
        status.trim().to_lowercase().as_str(),
        "ok" | "success" | "y" | "yes" | "true" | "1"
    )
}

/// Normalized outcome of a call that reached the backend
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Ok {
        records: Vec<T>,
        message: Option<String>,
    },
    Failed {
        message: String,
    },
}

impl<T> ApiResult<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, ApiResult::Ok { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ApiResult::Ok { message, .. } => message.as_deref(),
            ApiResult::Failed { message } => Some(message),
        }
    }

    pub fn into_records(self) -> Option<Vec<T>> {
        match self {
            ApiResult::Ok { records, .. } => Some(records),
            ApiResult::Failed { .. } => None,
        }
    }
}

impl RawEnvelope {
    pub fn parse(body: &str) -> Result<Self, EnvelopeError> {
        serde_json::from_str(body).map_err(|e| EnvelopeError::Json(e.to_string()))
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref().map(normalize_status).unwrap_or(false)
    }

    /// `data` with one extra JSON decode applied when it arrived as a string
    pub fn decoded_data(&self) -> Result<(Option<Value>, DataEncoding), EnvelopeError> {
        match &self.data {
            None | Some(Value::Null) => Ok((None, DataEncoding::Absent)),
            Some(Value::String(raw)) => {
                let trimmed = raw.trim_start();
                if trimmed.starts_with('{') || trimmed.starts_with('[') {
                    let inner: Value = serde_json::from_str(raw)
                        .map_err(|e| EnvelopeError::DoubleEncoded(e.to_string()))?;
                    Ok((Some(inner), DataEncoding::DoubleEncoded))
                } else {
                    Ok((Some(Value::String(raw.clone())), DataEncoding::Plain))
                }
            }
            Some(other) => Ok((Some(other.clone()), DataEncoding::Plain)),
        }
    }

    /// Raw row values: `records` wins, otherwise rows found inside `data`
    pub fn record_values(&self) -> Result<Vec<Value>, EnvelopeError> {
        if let Some(records) = &self.records {
            return Ok(rows_of(records));
        }
        let (data, _) = self.decoded_data()?;
        Ok(match data {
            Some(Value::Object(map)) if map.contains_key("records") => {
                map.get("records").map(rows_of).unwrap_or_default()
            }
            Some(value) => rows_of(&value),
            None => Vec::new(),
        })
    }

    pub fn into_result<T: DeserializeOwned>(self) -> Result<ApiResult<T>, EnvelopeError> {
        if !self.is_success() {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            return Ok(ApiResult::Failed { message });
        }

        let records = self
            .record_values()?
            .into_iter()
            .map(|v| serde_json::from_value::<T>(v).map_err(|e| EnvelopeError::Record(e.to_string())))
            .collect::<Result<Vec<T>, _>>()?;

        Ok(ApiResult::Ok {
            records,
            message: self.message,
        })
    }
}

fn rows_of(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::Object(_) => vec![value.clone()],
        _ => Vec::new(),
    }
}

/// Parse a response body straight into a normalized result
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<ApiResult<T>, EnvelopeError> {
    RawEnvelope::parse(body)?.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        futuretrxid: String,
    }

    #[test]
    fn test_status_spellings() {
        for ok in ["ok", "OK", "Success", " y ", "YES", "true", "1"] {
            assert!(normalize_status(ok), "{ok}");
        }
        for failed in ["error", "N", "failed", "", "0"] {
            assert!(!normalize_status(failed), "{failed}");
        }
    }

    #[test]
    fn test_status_as_bool_or_number() {
        let env = RawEnvelope::parse(r#"{"status": true}"#).unwrap();
        assert!(env.is_success());
        let env = RawEnvelope::parse(r#"{"status": 0}"#).unwrap();
        assert!(!env.is_success());
        let env = RawEnvelope::parse(r#"{}"#).unwrap();
        assert!(!env.is_success());
    }

    #[test]
    fn test_records_ok() {
        let body = r#"{"status":"OK","records":[{"futuretrxid":"1"},{"futuretrxid":"2"}]}"#;
        let result: ApiResult<Row> = decode_body(body).unwrap();
        let records = result.into_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].futuretrxid, "2");
    }

    #[test]
    fn test_failure_keeps_backend_message() {
        let result: ApiResult<Row> = decode_body(r#"{"status":"error","message":"no data"}"#).unwrap();
        assert_eq!(
            result,
            ApiResult::Failed {
                message: "no data".into()
            }
        );
    }

    #[test]
    fn test_failure_without_message_uses_generic() {
        let result: ApiResult<Row> = decode_body(r#"{"status":"N","message":"  "}"#).unwrap();
        assert_eq!(result.message(), Some(GENERIC_FAILURE_MESSAGE));
    }

    #[test]
    fn test_double_encoded_data() {
        let inner = json!([{"futuretrxid": "77"}]).to_string();
        let body = json!({"status": "success", "data": inner}).to_string();
        let env = RawEnvelope::parse(&body).unwrap();
        let (_, encoding) = env.decoded_data().unwrap();
        assert_eq!(encoding, DataEncoding::DoubleEncoded);

        let records = env.into_result::<Row>().unwrap().into_records().unwrap();
        assert_eq!(records, vec![Row { futuretrxid: "77".into() }]);
    }

    #[test]
    fn test_plain_data_object_with_records() {
        let body = json!({"status": "ok", "data": {"records": [{"futuretrxid": "5"}]}}).to_string();
        let records = decode_body::<Row>(&body).unwrap().into_records().unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_plain_string_data_is_not_reparsed() {
        let env = RawEnvelope::parse(r#"{"status":"ok","data":"done"}"#).unwrap();
        let (data, encoding) = env.decoded_data().unwrap();
        assert_eq!(encoding, DataEncoding::Plain);
        assert_eq!(data, Some(Value::String("done".into())));
        assert!(env.record_values().unwrap().is_empty());
    }

    #[test]
    fn test_broken_double_encoding_is_an_error() {
        let env = RawEnvelope::parse(r#"{"status":"ok","data":"{not json"}"#).unwrap();
        assert!(matches!(env.decoded_data(), Err(EnvelopeError::DoubleEncoded(_))));
    }

    #[test]
    fn test_record_shape_mismatch() {
        let result = decode_body::<Row>(r#"{"status":"ok","records":[{"other":1}]}"#);
        assert!(matches!(result, Err(EnvelopeError::Record(_))));
    }
}
