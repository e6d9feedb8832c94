use serde::{Deserialize, Serialize};

use crate::domain::common::{amount_cell, decode_uri, lenient_string};
use crate::shared::table::{CellValue, ColumnDef};
use crate::system::session::{is_supervisor, LoginInfo};

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_ON_PROCESS: &str = "On Process";

pub const AUTOMATION_FAILED: &str = "failed";

/// Withdrawal as returned by `getAutomationWithdrawList.php`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WithdrawTransaction {
    #[serde(default, deserialize_with = "lenient_string")]
    pub futuretrxid: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub insert: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub merchantcode: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub customercode: String,
    /// Destination (customer) account
    #[serde(default, alias = "accountDest", deserialize_with = "lenient_string")]
    pub accountdest: String,
    #[serde(default, alias = "bankDest", deserialize_with = "lenient_string")]
    pub bankdest: String,
    /// Source (agent) account; empty until assigned
    #[serde(default, alias = "accountSrc", deserialize_with = "lenient_string")]
    pub accountsrc: String,
    #[serde(default, alias = "bankSrc", deserialize_with = "lenient_string")]
    pub banksrc: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub amount: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, alias = "automationStatus", deserialize_with = "lenient_string")]
    pub automationstatus: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub memo: String,
}

impl WithdrawTransaction {
    pub fn key(&self) -> &str {
        &self.futuretrxid
    }

    pub fn is_pending(&self) -> bool {
        let status = self.status.trim();
        status.eq_ignore_ascii_case(STATUS_PENDING) || status.eq_ignore_ascii_case(STATUS_ON_PROCESS)
    }

    pub fn is_assigned(&self) -> bool {
        !self.accountsrc.trim().is_empty()
    }

    /// Open for (re)assignment: pending and not yet assigned, or automation gave up on it
    pub fn can_assign(&self) -> bool {
        self.is_pending()
            && (!self.is_assigned() || self.automationstatus.trim().eq_ignore_ascii_case(AUTOMATION_FAILED))
    }

    pub fn can_fail(&self, session: Option<&LoginInfo>) -> bool {
        is_supervisor(session) && self.is_pending()
    }
}

pub fn columns() -> Vec<ColumnDef<WithdrawTransaction>> {
    vec![
        ColumnDef::new("futuretrxid", "Future Trx ID", |r: &WithdrawTransaction| {
            CellValue::text(r.futuretrxid.clone())
        })
        .min_width(120.0)
        .text_filter(),
        ColumnDef::new("insert", "Date", |r: &WithdrawTransaction| CellValue::text(r.insert.clone()))
            .min_width(150.0),
        ColumnDef::new("merchantcode", "Merchant", |r: &WithdrawTransaction| {
            CellValue::text(r.merchantcode.clone())
        })
        .text_filter(),
        ColumnDef::new("accountdest", "Customer Account", |r: &WithdrawTransaction| {
            CellValue::text(r.accountdest.clone())
        })
        .min_width(140.0)
        .text_filter(),
        ColumnDef::new("bankdest", "Customer Bank", |r: &WithdrawTransaction| {
            CellValue::text(r.bankdest.clone())
        })
        .text_filter(),
        ColumnDef::new("accountsrc", "Agent Account", |r: &WithdrawTransaction| {
            CellValue::text(r.accountsrc.clone())
        })
        .text_filter(),
        ColumnDef::new("amount", "Amount", |r: &WithdrawTransaction| amount_cell(&r.amount))
            .numeric()
            .text_filter(),
        ColumnDef::new("status", "Status", |r: &WithdrawTransaction| CellValue::text(r.status.clone()))
            .select_filter([STATUS_PENDING, STATUS_ON_PROCESS, "Transaction Success", "Transaction Failed"]),
        ColumnDef::new("automationstatus", "Automation", |r: &WithdrawTransaction| {
            CellValue::text(r.automationstatus.clone())
        })
        .text_filter(),
        ColumnDef::new("memo", "Memo", |r: &WithdrawTransaction| CellValue::text(decode_uri(&r.memo)))
            .unsortable(),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawListQuery {
    pub datefrom: String,
    pub dateto: String,
}

/// `withdrawList_checkAutomation.php`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAutomationRequest {
    pub futuretrxid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailWithdrawRequest {
    pub futuretrxid: String,
    pub reason: String,
    pub user: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignWithdrawRequest {
    pub futuretrxid: String,
    pub accountsrc: String,
    pub banksrc: String,
    pub user: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str, accountsrc: &str, automation: &str) -> WithdrawTransaction {
        WithdrawTransaction {
            futuretrxid: "W1".into(),
            status: status.into(),
            accountsrc: accountsrc.into(),
            automationstatus: automation.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_assignment_rules() {
        assert!(row("Pending", "", "").can_assign());
        assert!(!row("Pending", "01700000000", "running").can_assign());
        assert!(row("on process", "01700000000", "Failed").can_assign());
        assert!(!row("Transaction Success", "", "").can_assign());
    }

    #[test]
    fn test_fail_requires_supervisor() {
        let sup = LoginInfo {
            user_type: "S".into(),
            ..Default::default()
        };
        assert!(row("Pending", "", "").can_fail(Some(&sup)));
        assert!(!row("Pending", "", "").can_fail(None));
    }

    #[test]
    fn test_camel_case_aliases() {
        let parsed: WithdrawTransaction = serde_json::from_str(
            r#"{"futuretrxid":"9","accountDest":"017","bankSrc":"NAGAD","automationStatus":"failed"}"#,
        )
        .unwrap();
        assert_eq!(parsed.accountdest, "017");
        assert_eq!(parsed.banksrc, "NAGAD");
        assert_eq!(parsed.automationstatus, "failed");
    }
}
