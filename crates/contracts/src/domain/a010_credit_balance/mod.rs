use serde::{Deserialize, Serialize};

use crate::domain::common::{amount_cell, lenient_string, to_number};
use crate::shared::table::{CellValue, ColumnDef};
use crate::shared::validation::{require, require_number, ValidationError};

/// Merchant credit balance from `cp_credit_balance.php`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreditBalance {
    #[serde(default, deserialize_with = "lenient_string")]
    pub merchantcode: String,
    #[serde(default, alias = "merchantName", deserialize_with = "lenient_string")]
    pub merchantname: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub balance: String,
    #[serde(default, alias = "creditLimit", deserialize_with = "lenient_string")]
    pub credit_limit: String,
    #[serde(default, alias = "lastUpdate", deserialize_with = "lenient_string")]
    pub last_update: String,
}

impl CreditBalance {
    pub fn key(&self) -> &str {
        &self.merchantcode
    }

    /// `limit - balance`; `None` when either side is not numeric
    pub fn available(&self) -> Option<f64> {
        Some(to_number(&self.credit_limit)? - to_number(&self.balance)?)
    }
}

pub fn columns() -> Vec<ColumnDef<CreditBalance>> {
    vec![
        ColumnDef::new("merchantcode", "Merchant", |r: &CreditBalance| {
            CellValue::text(r.merchantcode.clone())
        })
        .text_filter(),
        ColumnDef::new("merchantname", "Name", |r: &CreditBalance| {
            CellValue::text(r.merchantname.clone())
        })
        .min_width(160.0)
        .text_filter(),
        ColumnDef::new("balance", "Balance", |r: &CreditBalance| amount_cell(&r.balance)).numeric(),
        ColumnDef::new("credit_limit", "Limit", |r: &CreditBalance| amount_cell(&r.credit_limit))
            .numeric(),
        ColumnDef::new("available", "Available", |r: &CreditBalance| {
            r.available().map(CellValue::number).unwrap_or(CellValue::Empty)
        })
        .numeric(),
        ColumnDef::new("last_update", "Updated", |r: &CreditBalance| {
            CellValue::text(r.last_update.clone())
        })
        .min_width(150.0),
    ]
}

/// Form values of the adjustment modal before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreditAdjustmentForm {
    pub amount: String,
    pub note: String,
}

/// `cp_credit_adjustment.php`; a negative amount deducts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditAdjustmentRequest {
    pub merchantcode: String,
    pub amount: f64,
    pub note: String,
    pub user: String,
}

impl CreditAdjustmentRequest {
    pub fn from_form(row: &CreditBalance, form: &CreditAdjustmentForm, user: &str) -> Result<Self, ValidationError> {
        let amount = require_number(&form.amount, "Amount")?;
        if amount == 0.0 {
            return Err(ValidationError::MissingField("Amount"));
        }
        let note = require(&form.note, "Note")?.to_string();
        Ok(Self {
            merchantcode: row.merchantcode.clone(),
            amount,
            note,
            user: user.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merchant() -> CreditBalance {
        CreditBalance {
            merchantcode: "M01".into(),
            balance: "2,500".into(),
            credit_limit: "10000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_available_credit() {
        assert_eq!(merchant().available(), Some(7500.0));
        let broken = CreditBalance {
            credit_limit: "n/a".into(),
            ..merchant()
        };
        assert_eq!(broken.available(), None);
    }

    #[test]
    fn test_adjustment_form_validation() {
        let ok = CreditAdjustmentRequest::from_form(
            &merchant(),
            &CreditAdjustmentForm {
                amount: "-150.5".into(),
                note: " refund ".into(),
            },
            "sup",
        )
        .unwrap();
        assert_eq!(ok.amount, -150.5);
        assert_eq!(ok.note, "refund");

        let zero = CreditAdjustmentRequest::from_form(
            &merchant(),
            &CreditAdjustmentForm {
                amount: "0".into(),
                note: "x".into(),
            },
            "sup",
        );
        assert!(zero.is_err());

        let no_note = CreditAdjustmentRequest::from_form(
            &merchant(),
            &CreditAdjustmentForm {
                amount: "10".into(),
                note: "  ".into(),
            },
            "sup",
        );
        assert_eq!(no_note, Err(ValidationError::MissingField("Note")));
    }
}
