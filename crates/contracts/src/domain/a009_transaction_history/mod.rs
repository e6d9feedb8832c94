use serde::{Deserialize, Serialize};

use crate::domain::common::{amount_cell, decode_uri, lenient_string};
use crate::shared::table::{CellValue, ColumnDef};

pub const STATUS_SUCCESS: &str = "Transaction Success";
pub const STATUS_FAILED: &str = "Transaction Failed";

/// Finished transaction from `getTransactionHistory.php`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionHistoryRow {
    #[serde(default, deserialize_with = "lenient_string")]
    pub futuretrxid: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub insert: String,
    #[serde(default, alias = "completeDate", deserialize_with = "lenient_string")]
    pub completed: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub merchantcode: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub customercode: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub transactiontype: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub amount: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub fee: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    /// Merchant callback result: "Y" once delivered
    #[serde(default, alias = "callbackStatus", deserialize_with = "lenient_string")]
    pub callback: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: String,
}

impl TransactionHistoryRow {
    pub fn key(&self) -> &str {
        &self.futuretrxid
    }

    pub fn is_final(&self) -> bool {
        let status = self.status.trim();
        status.eq_ignore_ascii_case(STATUS_SUCCESS) || status.eq_ignore_ascii_case(STATUS_FAILED)
    }

    /// Callback to the merchant may be re-sent once the transaction is final
    pub fn can_resend(&self) -> bool {
        self.is_final()
    }

    pub fn type_label(&self) -> &'static str {
        match self.transactiontype.trim() {
            "D" | "d" => "Deposit",
            "W" | "w" => "Withdraw",
            _ => "Other",
        }
    }
}

pub fn columns() -> Vec<ColumnDef<TransactionHistoryRow>> {
    vec![
        ColumnDef::new("futuretrxid", "Future Trx ID", |r: &TransactionHistoryRow| {
            CellValue::text(r.futuretrxid.clone())
        })
        .min_width(120.0)
        .text_filter(),
        ColumnDef::new("insert", "Created", |r: &TransactionHistoryRow| CellValue::text(r.insert.clone()))
            .min_width(150.0),
        ColumnDef::new("completed", "Completed", |r: &TransactionHistoryRow| {
            CellValue::text(r.completed.clone())
        })
        .min_width(150.0),
        ColumnDef::new("merchantcode", "Merchant", |r: &TransactionHistoryRow| {
            CellValue::text(r.merchantcode.clone())
        })
        .text_filter(),
        ColumnDef::new("customercode", "Customer", |r: &TransactionHistoryRow| {
            CellValue::text(r.customercode.clone())
        })
        .text_filter(),
        ColumnDef::new("transactiontype", "Type", |r: &TransactionHistoryRow| {
            CellValue::text(r.type_label())
        })
        .select_filter(["Deposit", "Withdraw"]),
        ColumnDef::new("amount", "Amount", |r: &TransactionHistoryRow| amount_cell(&r.amount))
            .numeric()
            .text_filter(),
        ColumnDef::new("fee", "Fee", |r: &TransactionHistoryRow| amount_cell(&r.fee)).numeric(),
        ColumnDef::new("status", "Status", |r: &TransactionHistoryRow| CellValue::text(r.status.clone()))
            .select_filter([STATUS_SUCCESS, STATUS_FAILED]),
        ColumnDef::new("callback", "Callback", |r: &TransactionHistoryRow| {
            CellValue::text(r.callback.clone())
        })
        .select_filter(["Y", "N"]),
        ColumnDef::new("notes", "Notes", |r: &TransactionHistoryRow| CellValue::text(decode_uri(&r.notes)))
            .unsortable(),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryQuery {
    pub datefrom: String,
    pub dateto: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchantcode: Option<String>,
}

/// `resendTransaction.php`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendRequest {
    pub futuretrxid: String,
    pub user: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::{filtered_sorted_page, ColumnFilters, SortConfig, SortDirection};

    fn row(id: &str, kind: &str, amount: &str, status: &str) -> TransactionHistoryRow {
        TransactionHistoryRow {
            futuretrxid: id.into(),
            transactiontype: kind.into(),
            amount: amount.into(),
            status: status.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_history_pipeline() {
        let data = vec![
            row("1", "D", "500", STATUS_SUCCESS),
            row("2", "W", "1,200", STATUS_SUCCESS),
            row("3", "D", "90", STATUS_FAILED),
            row("4", "D", "3000", "Pending"),
        ];
        let mut filters = ColumnFilters::new();
        filters.insert("transactiontype".into(), "deposit".into());

        let sort = SortConfig::new("amount", SortDirection::Desc);
        let view = filtered_sorted_page(&data, &columns(), &filters, Some(&sort), 1, 2);
        assert_eq!(view.filtered_count, 3);
        assert_eq!(view.total_pages, 2);
        let ids: Vec<_> = view.rows.iter().map(|r| r.futuretrxid.as_str()).collect();
        assert_eq!(ids, vec!["4", "1"]);
    }

    #[test]
    fn test_resend_only_final() {
        assert!(row("1", "D", "1", STATUS_FAILED).can_resend());
        assert!(!row("1", "D", "1", "Pending").can_resend());
    }
}
