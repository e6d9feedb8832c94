use serde::{Deserialize, Serialize};

use crate::domain::common::{lenient_string, to_number};
use crate::shared::table::{CellValue, ColumnDef};

pub const POLL_INTERVAL_MS: u32 = 30_000;

/// Seconds since the last crawl before a crawler is flagged as stuck
pub const STALE_AFTER_SECS: f64 = 600.0;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CrawlerStatus {
    #[serde(default, alias = "crawlerId", deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, alias = "accountNo", deserialize_with = "lenient_string")]
    pub account: String,
    #[serde(default, alias = "bankCode", deserialize_with = "lenient_string")]
    pub bank: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, alias = "lastCrawl", deserialize_with = "lenient_string")]
    pub last_crawl: String,
    /// Seconds since `last_crawl`, computed by the backend
    #[serde(default, alias = "idleSeconds", deserialize_with = "lenient_string")]
    pub idle_seconds: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
}

impl CrawlerStatus {
    pub fn key(&self) -> &str {
        &self.id
    }

    pub fn is_stale(&self) -> bool {
        to_number(&self.idle_seconds)
            .map(|s| s >= STALE_AFTER_SECS)
            .unwrap_or(false)
    }
}

pub fn columns() -> Vec<ColumnDef<CrawlerStatus>> {
    vec![
        ColumnDef::new("id", "Crawler", |r: &CrawlerStatus| CellValue::text(r.id.clone())).text_filter(),
        ColumnDef::new("account", "Account", |r: &CrawlerStatus| CellValue::text(r.account.clone()))
            .text_filter(),
        ColumnDef::new("bank", "Bank", |r: &CrawlerStatus| CellValue::text(r.bank.clone())).text_filter(),
        ColumnDef::new("status", "Status", |r: &CrawlerStatus| CellValue::text(r.status.clone()))
            .select_filter(["running", "stopped", "error"]),
        ColumnDef::new("last_crawl", "Last Crawl", |r: &CrawlerStatus| {
            CellValue::text(r.last_crawl.clone())
        })
        .min_width(150.0),
        ColumnDef::new("idle_seconds", "Idle (s)", |r: &CrawlerStatus| {
            to_number(&r.idle_seconds)
                .map(CellValue::number)
                .unwrap_or(CellValue::Empty)
        })
        .numeric(),
        ColumnDef::new("message", "Message", |r: &CrawlerStatus| CellValue::text(r.message.clone()))
            .unsortable(),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestartCrawlerRequest {
    pub id: String,
    pub user: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_detection() {
        let fresh: CrawlerStatus = serde_json::from_str(r#"{"crawlerId":"c1","idleSeconds":12}"#).unwrap();
        let stuck: CrawlerStatus = serde_json::from_str(r#"{"crawlerId":"c2","idleSeconds":"900"}"#).unwrap();
        let unknown = CrawlerStatus::default();
        assert!(!fresh.is_stale());
        assert!(stuck.is_stale());
        assert!(!unknown.is_stale());
    }
}
