use serde::{Deserialize, Serialize};

use crate::domain::common::{is_truthy_flag, lenient_string};
use crate::shared::table::{composite_key, CellValue, ColumnDef};

/// Refresh period of the automation screen
pub const POLL_INTERVAL_MS: u32 = 10_000;

/// Automation worker attached to one agent account
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AutomationStatus {
    #[serde(default, alias = "accountNo", deserialize_with = "lenient_string")]
    pub account: String,
    #[serde(default, alias = "bankCode", deserialize_with = "lenient_string")]
    pub bank: String,
    #[serde(default, alias = "type", deserialize_with = "lenient_string")]
    pub service: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub active: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, alias = "lastRun", deserialize_with = "lenient_string")]
    pub last_run: String,
    #[serde(default, alias = "errorMessage", deserialize_with = "lenient_string")]
    pub error: String,
}

impl AutomationStatus {
    pub fn key(&self) -> String {
        composite_key(&[&self.account, &self.bank, &self.service])
    }

    pub fn is_active(&self) -> bool {
        is_truthy_flag(&self.active)
    }
}

pub fn columns() -> Vec<ColumnDef<AutomationStatus>> {
    vec![
        ColumnDef::new("account", "Account", |r: &AutomationStatus| CellValue::text(r.account.clone()))
            .text_filter(),
        ColumnDef::new("bank", "Bank", |r: &AutomationStatus| CellValue::text(r.bank.clone()))
            .text_filter(),
        ColumnDef::new("service", "Service", |r: &AutomationStatus| CellValue::text(r.service.clone()))
            .select_filter(["deposit", "withdraw"]),
        ColumnDef::new("active", "Enabled", |r: &AutomationStatus| {
            CellValue::text(if r.is_active() { "On" } else { "Off" })
        })
        .select_filter(["On", "Off"]),
        ColumnDef::new("status", "Status", |r: &AutomationStatus| CellValue::text(r.status.clone()))
            .text_filter(),
        ColumnDef::new("last_run", "Last Run", |r: &AutomationStatus| CellValue::text(r.last_run.clone()))
            .min_width(150.0),
        ColumnDef::new("error", "Error", |r: &AutomationStatus| CellValue::text(r.error.clone()))
            .min_width(200.0)
            .unsortable(),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleAutomationRequest {
    pub account: String,
    pub bank: String,
    pub service: String,
    /// "1" to switch on, "0" to switch off
    pub active: String,
    pub user: String,
}

impl ToggleAutomationRequest {
    pub fn flip(row: &AutomationStatus, user: &str) -> Self {
        Self {
            account: row.account.clone(),
            bank: row.bank.clone(),
            service: row.service.clone(),
            active: if row.is_active() { "0" } else { "1" }.to_string(),
            user: user.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_flag() {
        let row: AutomationStatus =
            serde_json::from_str(r#"{"accountNo":"017","bankCode":"NAGAD","type":"withdraw","active":true}"#)
                .unwrap();
        assert!(row.is_active());
        assert_eq!(row.key(), "017+NAGAD+withdraw");
        assert_eq!(ToggleAutomationRequest::flip(&row, "ops1").active, "0");
    }
}
