use serde::{Deserialize, Serialize};

use crate::domain::common::{amount_cell, decode_uri, is_truthy_flag, lenient_string};
use crate::shared::table::{composite_key, CellValue, ColumnDef};

/// Agent bank account row from `getMyBank.php`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BankAccount {
    #[serde(default, alias = "accountNo", deserialize_with = "lenient_string")]
    pub account: String,
    #[serde(default, alias = "bankCode", deserialize_with = "lenient_string")]
    pub bank: String,
    #[serde(default, alias = "accountName", deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, alias = "type", deserialize_with = "lenient_string")]
    pub account_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub balance: String,
    #[serde(default, alias = "dailyLimit", deserialize_with = "lenient_string")]
    pub daily_limit: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub active: String,
    #[serde(default, alias = "agentName", deserialize_with = "lenient_string")]
    pub agent: String,
    #[serde(default, alias = "lastOnline", deserialize_with = "lenient_string")]
    pub last_online: String,
    #[serde(default, alias = "memo2", deserialize_with = "lenient_string")]
    pub memo: String,
}

impl BankAccount {
    /// Accounts are unique per (account, bank), not per account number
    pub fn key(&self) -> String {
        composite_key(&[&self.account, &self.bank])
    }

    pub fn is_active(&self) -> bool {
        is_truthy_flag(&self.active)
    }

    pub fn memo_decoded(&self) -> String {
        decode_uri(&self.memo)
    }
}

pub fn columns() -> Vec<ColumnDef<BankAccount>> {
    vec![
        ColumnDef::new("account", "Account", |r: &BankAccount| CellValue::text(r.account.clone()))
            .min_width(130.0)
            .text_filter(),
        ColumnDef::new("bank", "Bank", |r: &BankAccount| CellValue::text(r.bank.clone())).text_filter(),
        ColumnDef::new("name", "Name", |r: &BankAccount| CellValue::text(r.name.clone())).text_filter(),
        ColumnDef::new("account_type", "Type", |r: &BankAccount| {
            CellValue::text(r.account_type.clone())
        })
        .select_filter(["D", "W", "DW"]),
        ColumnDef::new("agent", "Agent", |r: &BankAccount| CellValue::text(r.agent.clone())).text_filter(),
        ColumnDef::new("balance", "Balance", |r: &BankAccount| amount_cell(&r.balance)).numeric(),
        ColumnDef::new("daily_limit", "Daily Limit", |r: &BankAccount| amount_cell(&r.daily_limit))
            .numeric(),
        ColumnDef::new("active", "Active", |r: &BankAccount| {
            CellValue::text(if r.is_active() { "Yes" } else { "No" })
        })
        .select_filter(["Yes", "No"]),
        ColumnDef::new("last_online", "Last Online", |r: &BankAccount| {
            CellValue::text(r.last_online.clone())
        })
        .min_width(150.0),
        ColumnDef::new("memo", "Memo", |r: &BankAccount| CellValue::text(r.memo_decoded()))
            .min_width(180.0)
            .text_filter(),
    ]
}

/// Entry of `getMasterMyBank.php`, used to fill the bank select
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MasterBank {
    #[serde(default, alias = "bankCode", deserialize_with = "lenient_string")]
    pub bankcode: String,
    #[serde(default, alias = "bankName", deserialize_with = "lenient_string")]
    pub bankname: String,
}

/// Entry of `getMasterIBFT.php`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MasterIbft {
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyBankQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
}

/// `updateMemo2.php`; the memo travels URI-encoded like the rest of the notes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMemoRequest {
    pub account: String,
    pub bank: String,
    pub memo: String,
    pub user: String,
}

impl UpdateMemoRequest {
    pub fn new(row: &BankAccount, memo: &str, user: &str) -> Self {
        Self {
            account: row.account.clone(),
            bank: row.bank.clone(),
            memo: urlencoding::encode(memo.trim()).into_owned(),
            user: user.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleActiveRequest {
    pub account: String,
    pub bank: String,
    /// "Y" or "N"
    pub active: String,
    pub user: String,
}

impl ToggleActiveRequest {
    /// Flips the current state of `row`
    pub fn flip(row: &BankAccount, user: &str) -> Self {
        Self {
            account: row.account.clone(),
            bank: row.bank.clone(),
            active: if row.is_active() { "N" } else { "Y" }.to_string(),
            user: user.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_key_distinguishes_banks() {
        let a = BankAccount {
            account: "01711".into(),
            bank: "NAGAD".into(),
            ..Default::default()
        };
        let b = BankAccount {
            bank: "BKASH".into(),
            ..a.clone()
        };
        assert_eq!(a.key(), "01711+NAGAD");
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_memo_requests() {
        let row: BankAccount =
            serde_json::from_str(r#"{"accountNo":"017","bankCode":"NAGAD","active":"Y","memo2":"daily%20cap"}"#)
                .unwrap();
        assert_eq!(row.memo_decoded(), "daily cap");

        let req = UpdateMemoRequest::new(&row, " limit reached ", "ops1");
        assert_eq!(req.memo, "limit%20reached");

        let toggle = ToggleActiveRequest::flip(&row, "ops1");
        assert_eq!(toggle.active, "N");
    }
}
