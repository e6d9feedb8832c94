//! Column definitions for client-side tables.
//!
//! A column couples a stable `key` with an accessor that extracts the cell
//! value from a row. The same accessor drives filtering (string form) and
//! sorting (numeric-first comparison), so a screen never has to keep a
//! separate "sort accessor" map in sync with its columns.

use std::fmt;

/// Value of a single table cell as seen by filter and sort logic
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Text cell; empty strings collapse to `Empty`
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        value.map(CellValue::text).unwrap_or(CellValue::Empty)
    }

    pub fn number(value: f64) -> Self {
        if value.is_finite() {
            CellValue::Number(value)
        } else {
            CellValue::Empty
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// String form used for substring filtering and plain display
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Empty => String::new(),
        }
    }

    /// Numeric coercion: numbers as-is, text parsed after trimming and
    /// dropping thousands separators
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => {
                let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
                if cleaned.is_empty() {
                    return None;
                }
                cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            CellValue::Empty => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Inline filter control rendered in the column header
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnFilterKind {
    /// Free-text, case-insensitive substring match
    Text,
    /// Dropdown with fixed options; the empty option means "any"
    Select(Vec<String>),
}

/// Anything that carries a column key. Lets `TableControls` derive visible
/// columns for both plain definitions and UI wrappers around them.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Declarative description of one grid column
pub struct ColumnDef<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub min_width: Option<f64>,
    pub accessor: fn(&T) -> CellValue,
    pub filter: Option<ColumnFilterKind>,
    pub sortable: bool,
    pub align_right: bool,
}

impl<T> ColumnDef<T> {
    pub fn new(key: &'static str, label: &'static str, accessor: fn(&T) -> CellValue) -> Self {
        Self {
            key,
            label,
            min_width: None,
            accessor,
            filter: None,
            sortable: true,
            align_right: false,
        }
    }

    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn text_filter(mut self) -> Self {
        self.filter = Some(ColumnFilterKind::Text);
        self
    }

    pub fn select_filter<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = Some(ColumnFilterKind::Select(
            options.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Right-aligned (numeric) column
    pub fn numeric(mut self) -> Self {
        self.align_right = true;
        self
    }

    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }
}

// Manual impls: fn pointers are Copy regardless of T, derive would demand T: Clone
impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            min_width: self.min_width,
            accessor: self.accessor,
            filter: self.filter.clone(),
            sortable: self.sortable,
            align_right: self.align_right,
        }
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("min_width", &self.min_width)
            .field("filter", &self.filter)
            .field("sortable", &self.sortable)
            .finish()
    }
}

impl<T> Keyed for ColumnDef<T> {
    fn key(&self) -> &str {
        self.key
    }
}

/// Find a column by key. Duplicated keys resolve to the last definition.
pub fn find_column<'a, T>(columns: &'a [ColumnDef<T>], key: &str) -> Option<&'a ColumnDef<T>> {
    columns.iter().rev().find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_coercion() {
        assert_eq!(CellValue::text(""), CellValue::Empty);
        assert_eq!(CellValue::text("1,250.50").as_number(), Some(1250.5));
        assert_eq!(CellValue::text(" 42 ").as_number(), Some(42.0));
        assert_eq!(CellValue::text("DBBL").as_number(), None);
        assert_eq!(CellValue::number(f64::NAN), CellValue::Empty);
    }

    #[test]
    fn test_number_as_text() {
        assert_eq!(CellValue::Number(1500.0).as_text(), "1500");
        assert_eq!(CellValue::Number(12.75).as_text(), "12.75");
        assert_eq!(CellValue::Empty.as_text(), "");
    }

    #[test]
    fn test_find_column_last_wins() {
        struct Row;
        let columns = vec![
            ColumnDef::<Row>::new("status", "Status", |_| CellValue::text("first")),
            ColumnDef::<Row>::new("status", "Status 2", |_| CellValue::text("second")),
        ];
        let found = find_column(&columns, "status").map(|c| c.label);
        assert_eq!(found, Some("Status 2"));
        assert!(find_column(&columns, "missing").is_none());
    }
}
