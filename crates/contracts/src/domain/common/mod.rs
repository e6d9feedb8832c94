//! Helpers for backend-shaped rows.
//!
//! The PHP endpoints send the same field as a string on one call and a number
//! on the next, `null` where a string is expected, and some text fields
//! URI-encoded. Row structs use these instead of failing the whole response.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::shared::table::CellValue;

/// String, number, bool or null into a `String`
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => if b { "1" } else { "0" }.to_string(),
        Some(other) => other.to_string(),
    })
}

/// Like `lenient_string` but keeps absence visible
pub fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = lenient_string(deserializer)?;
    Ok(if s.is_empty() { None } else { Some(s) })
}

/// Lenient numeric coercion used for amounts and balances
pub fn to_number(value: &str) -> Option<f64> {
    let cleaned: String = value.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// `decodeURIComponent` that never fails: broken input comes back unchanged
pub fn decode_uri(value: &str) -> String {
    urlencoding::decode(value)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

/// Amount cell: numeric when the backend string parses, text otherwise
pub fn amount_cell(value: &str) -> CellValue {
    match to_number(value) {
        Some(n) => CellValue::number(n),
        None => CellValue::text(value),
    }
}

/// `1`/`Y`/`yes`/`true`/`active` flags
pub fn is_truthy_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "y" | "yes" | "true" | "active" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_string")]
        amount: String,
        #[serde(default, deserialize_with = "lenient_opt_string")]
        memo: Option<String>,
    }

    #[test]
    fn test_lenient_fields() {
        let row: Row = serde_json::from_str(r#"{"amount": 1500, "memo": null}"#).unwrap();
        assert_eq!(row.amount, "1500");
        assert_eq!(row.memo, None);

        let row: Row = serde_json::from_str(r#"{"amount": "99.5", "memo": "vip"}"#).unwrap();
        assert_eq!(row.amount, "99.5");
        assert_eq!(row.memo.as_deref(), Some("vip"));

        let row: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(row.amount, "");
    }

    #[test]
    fn test_decode_uri_and_flags() {
        assert_eq!(decode_uri("Cash%20In%20%28bKash%29"), "Cash In (bKash)");
        assert_eq!(decode_uri("%E0%A4%A"), "%E0%A4%A");
        assert!(is_truthy_flag("Y"));
        assert!(!is_truthy_flag("N"));
        assert_eq!(to_number("1,000.50"), Some(1000.5));
        assert_eq!(amount_cell("abc"), CellValue::text("abc"));
    }
}
