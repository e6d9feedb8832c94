//! API utilities for console-gateway communication
//!
//! The console talks to the PHP endpoints through the gateway, which listens
//! on port 3000 next to wherever the console was loaded from. A `?api=` query
//! parameter points the console at another gateway (staging, a local mock).

use std::collections::HashMap;

const GATEWAY_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// # Returns
/// - `?api=` override when present, e.g. "https://staging.example.com"
/// - otherwise "http://localhost:3000" or "https://example.com:3000"
/// - empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();

    let search = location.search().unwrap_or_default();
    if let Some(base) = api_override(&search) {
        return base;
    }

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, GATEWAY_PORT)
}

/// Full URL of a PHP endpoint behind the gateway
///
/// # Example
/// ```rust,ignore
/// let url = endpoint_url("GetDepositPendingList.php");
/// ```
pub fn endpoint_url(endpoint: &str) -> String {
    format!("{}/api/{}", api_base(), endpoint.trim_start_matches('/'))
}

fn api_override(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("api")
        .map(|base| base.trim().trim_end_matches('/').to_string())
        .filter(|base| !base.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_override() {
        assert_eq!(
            api_override("?screen=sms&api=https%3A%2F%2Fstaging.example.com%2F"),
            Some("https://staging.example.com".to_string())
        );
        assert_eq!(api_override("?screen=sms"), None);
        assert_eq!(api_override("?api="), None);
        assert_eq!(api_override(""), None);
    }
}
