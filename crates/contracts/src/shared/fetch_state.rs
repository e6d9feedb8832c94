//! Per-screen fetch state machine.
//!
//! `idle → loading → idle-with-data | idle-with-notice`. Loading flags are
//! cleared on every path so a failed request never leaves a spinner behind,
//! and a failed request keeps whatever rows were already on screen.

use serde::{Deserialize, Serialize};

use super::api_error::ApiError;
use super::envelope::{ApiResult, GENERIC_FAILURE_MESSAGE};
use super::request_seq::{RequestSequence, RequestToken};
use super::validation::ValidationError;

/// "Loud" shows the full-screen overlay, "silent" only the small spinner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Loud,
    Silent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// User-facing notification produced by a state transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, "Success", message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, "Error", message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, "Validation", message)
    }

    pub fn from_api_error(error: &ApiError) -> Self {
        match error {
            ApiError::Validation(msg) => Self::validation(msg.clone()),
            other => Self::new(NoticeLevel::Error, other.title(), other.to_string()),
        }
    }

    /// Outcome of a row action: backend message when present, fallback otherwise
    pub fn from_action<V>(outcome: &Result<ApiResult<V>, ApiError>, success_fallback: &str) -> Self {
        match outcome {
            Ok(ApiResult::Ok { message, .. }) => Self::success(
                message
                    .clone()
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| success_fallback.to_string()),
            ),
            Ok(ApiResult::Failed { message }) => Self::error(message.clone()),
            Err(e) => Self::from_api_error(e),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Vec<T>,
    pub loading: bool,
    pub refreshing: bool,
    pub loaded: bool,
    sequence: RequestSequence,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            loading: false,
            refreshing: false,
            loaded: false,
            sequence: RequestSequence::new(),
        }
    }
}

impl<T> FetchState<T> {
    pub fn is_busy(&self) -> bool {
        self.loading || self.refreshing
    }

    /// Raise the flag for `mode` and take a token for the response
    pub fn begin(&mut self, mode: FetchMode) -> RequestToken {
        match mode {
            FetchMode::Loud => self.loading = true,
            FetchMode::Silent => self.refreshing = true,
        }
        self.sequence.issue()
    }

    /// Validation failed before any request; nothing changes but the notice
    pub fn reject(&self, error: ValidationError) -> Notice {
        Notice::validation(error.to_string())
    }

    /// Apply a response. Stale tokens are dropped without touching state.
    pub fn finish(
        &mut self,
        token: RequestToken,
        outcome: Result<ApiResult<T>, ApiError>,
    ) -> Option<Notice> {
        if !self.sequence.is_latest(token) {
            return None;
        }

        self.loading = false;
        self.refreshing = false;

        match outcome {
            Ok(ApiResult::Ok { records, .. }) => {
                self.data = records;
                self.loaded = true;
                None
            }
            Ok(ApiResult::Failed { message }) => {
                let message = if message.trim().is_empty() {
                    GENERIC_FAILURE_MESSAGE.to_string()
                } else {
                    message
                };
                Some(Notice::error(message))
            }
            Err(e) => Some(Notice::from_api_error(&e)),
        }
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.loaded = false;
        self.sequence.invalidate();
        self.loading = false;
        self.refreshing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::envelope::decode_body;

    #[test]
    fn test_business_error_keeps_data_and_clears_loading() {
        let mut state: FetchState<serde_json::Value> = FetchState::default();
        let token = state.begin(FetchMode::Loud);
        assert!(state.loading);

        let outcome = decode_body(r#"{"status":"error","message":"no data"}"#).map_err(ApiError::from);
        let notice = state.finish(token, outcome).unwrap();

        assert_eq!(notice.title, "Error");
        assert_eq!(notice.message, "no data");
        assert!(state.data.is_empty());
        assert!(!state.loading);
        assert!(!state.refreshing);
    }

    #[test]
    fn test_success_replaces_data() {
        let mut state: FetchState<u32> = FetchState::default();
        let token = state.begin(FetchMode::Silent);
        assert!(state.refreshing && !state.loading);
        let notice = state.finish(
            token,
            Ok(ApiResult::Ok {
                records: vec![1, 2, 3],
                message: None,
            }),
        );
        assert!(notice.is_none());
        assert_eq!(state.data, vec![1, 2, 3]);
        assert!(state.loaded);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut state: FetchState<u32> = FetchState::default();
        let first = state.begin(FetchMode::Loud);
        let second = state.begin(FetchMode::Silent);

        let applied = state.finish(
            second,
            Ok(ApiResult::Ok {
                records: vec![2],
                message: None,
            }),
        );
        assert!(applied.is_none());

        let stale = state.finish(first, Err(ApiError::Transport("timeout".into())));
        assert!(stale.is_none());
        assert_eq!(state.data, vec![2]);
    }

    #[test]
    fn test_transport_error_notice() {
        let mut state: FetchState<u32> = FetchState::default();
        state.data = vec![9];
        let token = state.begin(FetchMode::Loud);
        let notice = state
            .finish(token, Err(ApiError::Transport("connection refused".into())))
            .unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.contains("connection refused"));
        assert_eq!(state.data, vec![9]);
    }

    #[test]
    fn test_validation_reject() {
        let state: FetchState<u32> = FetchState::default();
        let notice = state.reject(ValidationError::MissingDate);
        assert_eq!(notice.title, "Validation");
        assert_eq!(notice.message, "Please choose a date");
        assert!(!state.is_busy());
    }

    #[test]
    fn test_action_notice_fallback() {
        let ok: Result<ApiResult<()>, ApiError> = Ok(ApiResult::Ok {
            records: vec![],
            message: None,
        });
        assert_eq!(Notice::from_action(&ok, "Approved").message, "Approved");

        let failed: Result<ApiResult<()>, ApiError> = Ok(ApiResult::Failed {
            message: "Already processed".into(),
        });
        let notice = Notice::from_action(&failed, "Approved");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Already processed");
    }
}
