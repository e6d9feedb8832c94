//! REST client helpers, one module per endpoint group.
//!
//! List calls return `Result<ApiResult<Row>, ApiError>` and feed a
//! `FetchState`; action calls return [`ActionResult`] and only the outcome and
//! backend message are used.
//!
//! [`ActionResult`]: crate::shared::http::ActionResult

pub mod agent_tracker;
pub mod crawler;
pub mod credit;
pub mod mybank;
pub mod service_automation;
pub mod service_nagad;
pub mod sms;
pub mod transaction;
pub mod withdraw;

use serde::Serialize;

/// Body for list endpoints that take no parameters
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoParams {}
