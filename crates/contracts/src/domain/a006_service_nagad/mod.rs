use serde::{Deserialize, Serialize};

use crate::domain::common::{amount_cell, lenient_string};
use crate::shared::table::{CellValue, ColumnDef};

pub const STATUS_FAILED: &str = "Failed";
pub const STATUS_TIMEOUT: &str = "Timeout";
pub const STATUS_SUCCESS: &str = "Success";

/// Call made to the Nagad payout API for one transaction
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NagadServiceRow {
    #[serde(default, deserialize_with = "lenient_string")]
    pub futuretrxid: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub insert: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub merchantcode: String,
    #[serde(default, alias = "accountDest", deserialize_with = "lenient_string")]
    pub accountdest: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub amount: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, alias = "responseCode", deserialize_with = "lenient_string")]
    pub response_code: String,
    #[serde(default, alias = "responseMessage", deserialize_with = "lenient_string")]
    pub response_message: String,
    #[serde(default, alias = "retryCount", deserialize_with = "lenient_string")]
    pub retry_count: String,
}

impl NagadServiceRow {
    pub fn key(&self) -> &str {
        &self.futuretrxid
    }

    /// Only calls that did not go through may be sent again
    pub fn can_resubmit(&self) -> bool {
        let status = self.status.trim();
        status.eq_ignore_ascii_case(STATUS_FAILED) || status.eq_ignore_ascii_case(STATUS_TIMEOUT)
    }
}

pub fn columns() -> Vec<ColumnDef<NagadServiceRow>> {
    vec![
        ColumnDef::new("futuretrxid", "Future Trx ID", |r: &NagadServiceRow| {
            CellValue::text(r.futuretrxid.clone())
        })
        .min_width(120.0)
        .text_filter(),
        ColumnDef::new("insert", "Date", |r: &NagadServiceRow| CellValue::text(r.insert.clone()))
            .min_width(150.0),
        ColumnDef::new("merchantcode", "Merchant", |r: &NagadServiceRow| {
            CellValue::text(r.merchantcode.clone())
        })
        .text_filter(),
        ColumnDef::new("accountdest", "Wallet", |r: &NagadServiceRow| {
            CellValue::text(r.accountdest.clone())
        })
        .text_filter(),
        ColumnDef::new("amount", "Amount", |r: &NagadServiceRow| amount_cell(&r.amount)).numeric(),
        ColumnDef::new("status", "Status", |r: &NagadServiceRow| CellValue::text(r.status.clone()))
            .select_filter([STATUS_SUCCESS, STATUS_FAILED, STATUS_TIMEOUT]),
        ColumnDef::new("response_code", "Code", |r: &NagadServiceRow| {
            CellValue::text(r.response_code.clone())
        })
        .text_filter(),
        ColumnDef::new("response_message", "Response", |r: &NagadServiceRow| {
            CellValue::text(r.response_message.clone())
        })
        .min_width(200.0)
        .text_filter(),
        ColumnDef::new("retry_count", "Retries", |r: &NagadServiceRow| amount_cell(&r.retry_count))
            .numeric(),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NagadListQuery {
    pub datefrom: String,
    pub dateto: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResubmitRequest {
    pub futuretrxid: String,
    pub user: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::batch::BatchPlan;

    #[test]
    fn test_only_failed_rows_are_planned() {
        let rows: Vec<NagadServiceRow> = (0..30)
            .map(|i| NagadServiceRow {
                futuretrxid: i.to_string(),
                status: if i % 3 == 0 { "Success" } else { "failed" }.into(),
                ..Default::default()
            })
            .collect();

        let requests: Vec<ResubmitRequest> = rows
            .iter()
            .filter(|r| r.can_resubmit())
            .map(|r| ResubmitRequest {
                futuretrxid: r.futuretrxid.clone(),
                user: "ops1".into(),
            })
            .collect();
        assert_eq!(requests.len(), 20);

        let plan = BatchPlan::with_defaults(requests);
        assert_eq!(plan.total_batches(), 1);
        assert_eq!(plan.total_items(), 20);
    }

    #[test]
    fn test_timeout_can_resubmit() {
        let row = NagadServiceRow {
            status: "TIMEOUT".into(),
            ..Default::default()
        };
        assert!(row.can_resubmit());
    }
}
