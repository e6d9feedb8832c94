use serde::{Deserialize, Serialize};

use crate::domain::common::{amount_cell, decode_uri, is_truthy_flag, lenient_string};
use crate::shared::table::{CellValue, ColumnDef};
use crate::shared::validation::{require, require_number, ValidationError};
use crate::system::session::{is_supervisor, LoginInfo};

/// Status of a transaction waiting for manual operator review
pub const STATUS_NEED_TO_CHECK: &str = "Order need to check";

pub const TRANSACTION_TYPE_DEPOSIT: &str = "D";

/// Status written by the manual "Fail" action
pub const STATUS_FAILED: &str = "Transaction Failed";

pub const STATUS_OPTIONS: &[&str] = &[
    STATUS_NEED_TO_CHECK,
    "Pending",
    "Transaction Success",
    STATUS_FAILED,
];

// ============================================================================
// Row
// ============================================================================

/// Pending deposit as returned by `GetDepositPendingList.php`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DepositTransaction {
    #[serde(default, deserialize_with = "lenient_string")]
    pub futuretrxid: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub insert: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub accountno: String,
    /// Older endpoints name the column `account`; read through [`Self::account`]
    #[serde(default, rename = "account", deserialize_with = "lenient_string", skip_serializing)]
    pub account_legacy: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bankcode: String,
    #[serde(default, rename = "bank", deserialize_with = "lenient_string", skip_serializing)]
    pub bank_legacy: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub amount: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub customercode: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub transactiontype: String,
    /// "1" when manual handling is enabled for the row
    #[serde(default, deserialize_with = "lenient_string")]
    pub disable: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub merchantcode: String,
}

impl DepositTransaction {
    pub fn key(&self) -> &str {
        &self.futuretrxid
    }

    /// `accountno` when present, the legacy `account` otherwise
    pub fn account(&self) -> &str {
        prefer(&self.accountno, &self.account_legacy)
    }

    pub fn bank(&self) -> &str {
        prefer(&self.bankcode, &self.bank_legacy)
    }

    pub fn is_need_to_check(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case(STATUS_NEED_TO_CHECK)
    }

    pub fn is_deposit(&self) -> bool {
        self.transactiontype.trim().eq_ignore_ascii_case(TRANSACTION_TYPE_DEPOSIT)
    }

    pub fn manual_enabled(&self) -> bool {
        is_truthy_flag(&self.disable)
    }

    /// Whether the Approve / Fail buttons render for this row
    pub fn validate(&self, session: Option<&LoginInfo>) -> bool {
        is_supervisor(session) && self.is_need_to_check() && self.is_deposit() && self.manual_enabled()
    }

    /// Matching against mutasi / SMS is allowed for any operator on NTC rows
    pub fn can_match(&self) -> bool {
        self.is_need_to_check() && self.is_deposit()
    }

    pub fn notes_decoded(&self) -> String {
        decode_uri(&self.notes)
    }
}

pub fn columns() -> Vec<ColumnDef<DepositTransaction>> {
    vec![
        ColumnDef::new("futuretrxid", "Future Trx ID", |r: &DepositTransaction| {
            CellValue::text(r.futuretrxid.clone())
        })
        .min_width(120.0)
        .text_filter(),
        ColumnDef::new("insert", "Date", |r: &DepositTransaction| CellValue::text(r.insert.clone()))
            .min_width(150.0),
        ColumnDef::new("merchantcode", "Merchant", |r: &DepositTransaction| {
            CellValue::text(r.merchantcode.clone())
        })
        .text_filter(),
        ColumnDef::new("customercode", "Customer", |r: &DepositTransaction| {
            CellValue::text(r.customercode.clone())
        })
        .text_filter(),
        ColumnDef::new("accountno", "Account", |r: &DepositTransaction| {
            CellValue::text(r.account())
        })
        .min_width(130.0)
        .text_filter(),
        ColumnDef::new("bankcode", "Bank", |r: &DepositTransaction| CellValue::text(r.bank()))
            .text_filter(),
        ColumnDef::new("amount", "Amount", |r: &DepositTransaction| amount_cell(&r.amount))
            .numeric()
            .text_filter(),
        ColumnDef::new("status", "Status", |r: &DepositTransaction| CellValue::text(r.status.clone()))
            .min_width(160.0)
            .select_filter(STATUS_OPTIONS.iter().copied()),
        ColumnDef::new("notes", "Notes", |r: &DepositTransaction| CellValue::text(r.notes_decoded()))
            .unsortable(),
    ]
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositPendingQuery {
    pub datefrom: String,
    pub dateto: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accountno: Option<String>,
}

/// `changeStatusSuccessTransactionAccountByCompany.php`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproveDepositRequest {
    pub futuretrxid: String,
    pub user: String,
}

/// `updateManualTransaction.php` with a failed status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualStatusRequest {
    pub futuretrxid: String,
    pub status: String,
    pub notes: String,
    pub user: String,
}

/// `depositQueue_matchedMutasi.php`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchMutasiRequest {
    pub futuretrxid: String,
    pub mutasiid: String,
    pub user: String,
}

/// `depositQueue_matchedSms.php`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSmsRequest {
    pub futuretrxid: String,
    pub smsid: String,
    pub user: String,
}

/// `transactionByAccount_edit.php`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditDepositRequest {
    pub futuretrxid: String,
    pub amount: String,
    pub accountno: String,
    pub user: String,
}

impl EditDepositRequest {
    /// Amount must be a positive number, account must be filled in
    pub fn from_form(
        row: &DepositTransaction,
        amount: &str,
        accountno: &str,
        user: &str,
    ) -> Result<Self, ValidationError> {
        let value = require_number(amount, "Amount")?;
        if value <= 0.0 {
            return Err(ValidationError::NotANumber("Amount"));
        }
        Ok(Self {
            futuretrxid: row.futuretrxid.clone(),
            amount: value.to_string(),
            accountno: require(accountno, "Account")?.to_string(),
            user: user.to_string(),
        })
    }
}

fn prefer<'a>(primary: &'a str, fallback: &'a str) -> &'a str {
    if primary.trim().is_empty() {
        fallback
    } else {
        primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::envelope::decode_body;

    fn supervisor() -> LoginInfo {
        LoginInfo {
            user_type: "S".into(),
            username: "sup".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_need_to_check_row_is_approvable_by_supervisor() {
        let body = r#"{"status":"OK","records":[{"futuretrxid":"1","status":"Order need to check","transactiontype":"D","disable":"1"}]}"#;
        let rows = decode_body::<DepositTransaction>(body)
            .unwrap()
            .into_records()
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].validate(Some(&supervisor())));
    }

    #[test]
    fn test_account_and_legacy_name_together() {
        let body = r#"{"status":"ok","records":[
            {"futuretrxid":"1","accountno":"0123","account":"9999","bankcode":"DBBL","bank":"OLD"},
            {"futuretrxid":"2","account":"0456","bank":"BKASH"}
        ]}"#;
        let rows = decode_body::<DepositTransaction>(body)
            .unwrap()
            .into_records()
            .unwrap();
        assert_eq!((rows[0].account(), rows[0].bank()), ("0123", "DBBL"));
        assert_eq!((rows[1].account(), rows[1].bank()), ("0456", "BKASH"));
    }

    #[test]
    fn test_validate_rejects_other_cases() {
        let row = DepositTransaction {
            futuretrxid: "1".into(),
            status: STATUS_NEED_TO_CHECK.into(),
            transactiontype: "D".into(),
            disable: "1".into(),
            ..Default::default()
        };
        let operator = LoginInfo {
            user_type: "O".into(),
            ..Default::default()
        };
        assert!(!row.validate(Some(&operator)));
        assert!(!row.validate(None));

        let withdraw = DepositTransaction {
            transactiontype: "W".into(),
            ..row.clone()
        };
        assert!(!withdraw.validate(Some(&supervisor())));

        let done = DepositTransaction {
            status: "Transaction Success".into(),
            ..row.clone()
        };
        assert!(!done.validate(Some(&supervisor())));
        assert!(!done.can_match());

        let locked = DepositTransaction {
            disable: "0".into(),
            ..row
        };
        assert!(!locked.validate(Some(&supervisor())));
        assert!(locked.can_match());
    }

    #[test]
    fn test_edit_request_validation() {
        let row = DepositTransaction {
            futuretrxid: "77".into(),
            ..Default::default()
        };
        let request = EditDepositRequest::from_form(&row, "1,500", " 0123 ", "sup").unwrap();
        assert_eq!(request.amount, "1500");
        assert_eq!(request.accountno, "0123");

        assert_eq!(
            EditDepositRequest::from_form(&row, "", "0123", "sup").unwrap_err(),
            ValidationError::MissingField("Amount")
        );
        assert_eq!(
            EditDepositRequest::from_form(&row, "abc", "0123", "sup").unwrap_err(),
            ValidationError::NotANumber("Amount")
        );
        assert_eq!(
            EditDepositRequest::from_form(&row, "10", " ", "sup").unwrap_err(),
            ValidationError::MissingField("Account")
        );
    }

    #[test]
    fn test_numeric_fields_and_notes() {
        let rows = decode_body::<DepositTransaction>(
            r#"{"status":"ok","records":[{"futuretrxid":42,"amount":1500,"notes":"Cash%20In"}]}"#,
        )
        .unwrap()
        .into_records()
        .unwrap();
        assert_eq!(rows[0].futuretrxid, "42");
        assert_eq!(rows[0].amount, "1500");
        assert_eq!(rows[0].notes_decoded(), "Cash In");
    }
}
