use serde::{Deserialize, Serialize};

use crate::domain::common::{amount_cell, decode_uri, is_truthy_flag, lenient_string};
use crate::shared::table::{CellValue, ColumnDef};

/// Incoming SMS captured from an agent phone
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SmsRecord {
    #[serde(default, alias = "smsid", deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, alias = "timestamp", deserialize_with = "lenient_string")]
    pub insert: String,
    #[serde(default, alias = "phonenumber", deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sender: String,
    #[serde(default, alias = "trxid", deserialize_with = "lenient_string")]
    pub trx_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub amount: String,
    #[serde(default, alias = "message", deserialize_with = "lenient_string")]
    pub body: String,
    /// Already matched against a deposit
    #[serde(default, alias = "isUsed", deserialize_with = "lenient_string")]
    pub used: String,
}

impl SmsRecord {
    pub fn key(&self) -> &str {
        &self.id
    }

    pub fn is_used(&self) -> bool {
        is_truthy_flag(&self.used)
    }

    pub fn body_decoded(&self) -> String {
        decode_uri(&self.body)
    }
}

pub fn columns() -> Vec<ColumnDef<SmsRecord>> {
    vec![
        ColumnDef::new("id", "SMS ID", |r: &SmsRecord| CellValue::text(r.id.clone())).text_filter(),
        ColumnDef::new("insert", "Received", |r: &SmsRecord| CellValue::text(r.insert.clone()))
            .min_width(150.0),
        ColumnDef::new("phone", "Phone", |r: &SmsRecord| CellValue::text(r.phone.clone())).text_filter(),
        ColumnDef::new("sender", "Sender", |r: &SmsRecord| CellValue::text(r.sender.clone())).text_filter(),
        ColumnDef::new("trx_id", "Trx ID", |r: &SmsRecord| CellValue::text(r.trx_id.clone()))
            .min_width(120.0)
            .text_filter(),
        ColumnDef::new("amount", "Amount", |r: &SmsRecord| amount_cell(&r.amount))
            .numeric()
            .text_filter(),
        ColumnDef::new("used", "Used", |r: &SmsRecord| {
            CellValue::text(if r.is_used() { "Yes" } else { "No" })
        })
        .select_filter(["Yes", "No"]),
        ColumnDef::new("body", "Message", |r: &SmsRecord| CellValue::text(r.body_decoded()))
            .min_width(260.0)
            .text_filter()
            .unsortable(),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsListQuery {
    pub datefrom: String,
    pub dateto: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkSmsRequest {
    pub id: String,
    pub user: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::{filter_rows, ColumnFilters};

    #[test]
    fn test_filter_on_derived_used_column() {
        let rows: Vec<SmsRecord> = serde_json::from_str(
            r#"[{"smsid":1,"used":"1","message":"Cash%20In%20Tk%20500"},{"smsid":2,"used":"0"}]"#,
        )
        .unwrap();
        assert_eq!(rows[0].body_decoded(), "Cash In Tk 500");

        let mut filters = ColumnFilters::new();
        filters.insert("used".into(), "no".into());
        let kept = filter_rows(&rows, &columns(), &filters);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "2");
    }
}
