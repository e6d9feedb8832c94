//! Glue between a screen's `FetchState`, the REST helpers and notifications.
//!
//! ```rust,ignore
//! let data = RwSignal::new(FetchState::<SmsRecord>::default());
//! load_into(data, FetchMode::Loud, notifications, "sms", async move {
//!     api::sms::fetch_sms(&query).await
//! });
//! ```

use std::future::Future;

use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ApiResult;
use contracts::shared::fetch_state::{FetchMode, FetchState, Notice};
use contracts::shared::validation::ValidationError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::http::ActionResult;
use super::notifications::NotificationService;

/// Start a fetch and apply its response when it is still the latest one
pub fn load_into<T, Fut>(
    state: RwSignal<FetchState<T>>,
    mode: FetchMode,
    notifications: NotificationService,
    label: &'static str,
    request: Fut,
) where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<ApiResult<T>, ApiError>> + 'static,
{
    let Some(token) = state.try_update(|s| s.begin(mode)) else {
        return;
    };
    log::debug!("{}: fetch #{} ({:?})", label, token.value(), mode);

    spawn_local(async move {
        let outcome = request.await;
        if let Ok(ApiResult::Ok { records, .. }) = &outcome {
            log::info!("{}: {} row(s)", label, records.len());
        }

        let notice = state.try_update(|s| s.finish(token, outcome)).flatten();
        if let Some(notice) = notice {
            notifications.notify(notice);
        }
    });
}

/// Validation failed before anything was sent
pub fn reject(notifications: NotificationService, error: ValidationError) {
    notifications.notify(Notice::validation(error.to_string()));
}

/// Report an action outcome; true when the backend accepted it
pub fn report_action(
    notifications: NotificationService,
    outcome: &ActionResult,
    success_fallback: &str,
) -> bool {
    notifications.notify(Notice::from_action(outcome, success_fallback));
    matches!(outcome, Ok(result) if result.is_ok())
}
