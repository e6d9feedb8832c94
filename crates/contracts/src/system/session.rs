use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Local storage key written by the login page
pub const LOGIN_INFO_KEY: &str = "bropay-login-info";

/// Session of the logged-in operator.
///
/// Only used to decide which action buttons a screen renders; screens never
/// write it back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginInfo {
    #[serde(rename = "type", default)]
    pub user_type: String,
    #[serde(default, alias = "userName", alias = "user")]
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "merchantCode")]
    pub merchant_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    /// `type == "S"`: may approve, fail and adjust
    Supervisor,
    Operator,
}

impl LoginInfo {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("stored login info is not valid JSON")
    }

    pub fn role(&self) -> UserRole {
        if self.user_type.trim().eq_ignore_ascii_case("S") {
            UserRole::Supervisor
        } else {
            UserRole::Operator
        }
    }

    pub fn is_supervisor(&self) -> bool {
        self.role() == UserRole::Supervisor
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }
}

/// Helper for screens: no session means no privileged buttons
pub fn is_supervisor(session: Option<&LoginInfo>) -> bool {
    session.map(LoginInfo::is_supervisor).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stored_login_info() {
        let info = LoginInfo::from_json(r#"{"type":"S","userName":"ops1","merchantCode":"M01"}"#).unwrap();
        assert_eq!(info.role(), UserRole::Supervisor);
        assert_eq!(info.username, "ops1");
        assert_eq!(info.merchant_code.as_deref(), Some("M01"));
        assert_eq!(info.display_name(), "ops1");
    }

    #[test]
    fn test_operator_and_missing_session() {
        let info = LoginInfo::from_json(r#"{"type":"A","username":"agent","name":"Rahim"}"#).unwrap();
        assert!(!info.is_supervisor());
        assert_eq!(info.display_name(), "Rahim");
        assert!(!is_supervisor(None));
        assert!(LoginInfo::from_json("not json").is_err());
    }
}
