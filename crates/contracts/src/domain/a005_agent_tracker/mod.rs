use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::common::{amount_cell, lenient_string};
use crate::shared::table::{composite_key, CellValue, ColumnDef};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Minutes without a heartbeat before an agent counts as offline
pub const OFFLINE_AFTER_MINUTES: i64 = 5;

pub const POLL_INTERVAL_MS: u32 = 60_000;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AgentActivity {
    #[serde(default, alias = "agentName", deserialize_with = "lenient_string")]
    pub agent: String,
    #[serde(default, alias = "accountNo", deserialize_with = "lenient_string")]
    pub account: String,
    #[serde(default, alias = "bankCode", deserialize_with = "lenient_string")]
    pub bank: String,
    #[serde(default, alias = "lastActivity", deserialize_with = "lenient_string")]
    pub last_activity: String,
    #[serde(default, alias = "lastAction", deserialize_with = "lenient_string")]
    pub last_action: String,
    #[serde(default, alias = "pendingCount", deserialize_with = "lenient_string")]
    pub pending: String,
    #[serde(default, alias = "appVersion", deserialize_with = "lenient_string")]
    pub app_version: String,
}

impl AgentActivity {
    pub fn key(&self) -> String {
        composite_key(&[&self.agent, &self.account, &self.bank])
    }

    pub fn last_seen(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.last_activity.trim(), TIMESTAMP_FORMAT).ok()
    }

    /// Offline when the last heartbeat is older than the threshold or unknown
    pub fn is_online(&self, now: NaiveDateTime) -> bool {
        self.last_seen()
            .map(|seen| (now - seen).num_minutes() < OFFLINE_AFTER_MINUTES)
            .unwrap_or(false)
    }
}

pub fn columns() -> Vec<ColumnDef<AgentActivity>> {
    vec![
        ColumnDef::new("agent", "Agent", |r: &AgentActivity| CellValue::text(r.agent.clone())).text_filter(),
        ColumnDef::new("account", "Account", |r: &AgentActivity| CellValue::text(r.account.clone()))
            .text_filter(),
        ColumnDef::new("bank", "Bank", |r: &AgentActivity| CellValue::text(r.bank.clone())).text_filter(),
        ColumnDef::new("last_activity", "Last Activity", |r: &AgentActivity| {
            CellValue::text(r.last_activity.clone())
        })
        .min_width(150.0),
        ColumnDef::new("last_action", "Last Action", |r: &AgentActivity| {
            CellValue::text(r.last_action.clone())
        })
        .text_filter(),
        ColumnDef::new("pending", "Pending", |r: &AgentActivity| amount_cell(&r.pending)).numeric(),
        ColumnDef::new("app_version", "App", |r: &AgentActivity| CellValue::text(r.app_version.clone()))
            .text_filter(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn test_online_threshold() {
        let row = AgentActivity {
            agent: "a1".into(),
            last_activity: "2024-03-01 10:00:00".into(),
            ..Default::default()
        };
        assert!(row.is_online(at("2024-03-01 10:04:59")));
        assert!(!row.is_online(at("2024-03-01 10:05:00")));

        let unknown = AgentActivity {
            last_activity: "yesterday".into(),
            ..row
        };
        assert!(!unknown.is_online(at("2024-03-01 10:00:00")));
    }

    #[test]
    fn test_pending_sorts_numerically() {
        use crate::shared::table::{sort_rows, SortConfig, SortDirection};

        let mut rows: Vec<AgentActivity> = ["10", "9", "", "100"]
            .iter()
            .map(|p| AgentActivity {
                pending: p.to_string(),
                ..Default::default()
            })
            .collect();
        sort_rows(&mut rows, &columns(), Some(&SortConfig::new("pending", SortDirection::Asc)));
        let order: Vec<_> = rows.iter().map(|r| r.pending.as_str()).collect();
        assert_eq!(order, vec!["9", "10", "100", ""]);
    }
}
