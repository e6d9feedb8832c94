//! Filter → sort → paginate over rows that are already loaded.
//!
//! One pipeline for every list screen. Column accessors decide what a filter
//! sees and what the comparator compares, pages are 1-based.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::column::{find_column, CellValue, ColumnDef};
use super::controls::SortConfig;

/// Current free-text or select value per column key, owned by the screen
pub type ColumnFilters = BTreeMap<String, String>;

/// Case-insensitive substring containment; an empty filter always passes
pub fn includes_value(field: &str, filter: &str) -> bool {
    let needle = filter.trim();
    if needle.is_empty() {
        return true;
    }
    field.to_lowercase().contains(&needle.to_lowercase())
}

pub fn active_filter_count(filters: &ColumnFilters) -> usize {
    filters.values().filter(|v| !v.trim().is_empty()).count()
}

/// Drop the filter of a column that stopped taking part in the pipeline
pub fn clear_column_filter(filters: &mut ColumnFilters, key: &str) -> bool {
    filters.remove(key).is_some_and(|v| !v.trim().is_empty())
}

/// A row passes when every non-empty filter matches its column.
/// Filters for keys without a column are ignored.
pub fn row_matches<T>(row: &T, columns: &[ColumnDef<T>], filters: &ColumnFilters) -> bool {
    filters.iter().all(|(key, value)| {
        if value.trim().is_empty() {
            return true;
        }
        match find_column(columns, key) {
            Some(column) => includes_value(&column.value(row).as_text(), value),
            None => true,
        }
    })
}

pub fn filter_rows<T: Clone>(rows: &[T], columns: &[ColumnDef<T>], filters: &ColumnFilters) -> Vec<T> {
    rows.iter()
        .filter(|row| row_matches(*row, columns, filters))
        .cloned()
        .collect()
}

/// Numbers before text before empty cells. Numbers compare by value, text
/// case-insensitively, so mixed columns still get a total order.
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (sort_key(a), sort_key(b)) {
        (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(&y),
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(&y),
        (x, y) => x.rank().cmp(&y.rank()),
    }
}

enum SortKey {
    Number(f64),
    Text(String),
    Empty,
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Text(_) => 1,
            SortKey::Empty => 2,
        }
    }
}

fn sort_key(value: &CellValue) -> SortKey {
    if value.is_empty() {
        return SortKey::Empty;
    }
    match value.as_number() {
        Some(n) => SortKey::Number(n),
        None => SortKey::Text(value.as_text().to_lowercase()),
    }
}

/// Stable sort by the active key; no sort or an unknown key leaves order as is
pub fn sort_rows<T>(rows: &mut [T], columns: &[ColumnDef<T>], sort: Option<&SortConfig>) {
    let Some(sort) = sort else {
        return;
    };
    let Some(column) = find_column(columns, &sort.key) else {
        return;
    };
    rows.sort_by(|a, b| sort.direction.apply(compare_cells(&column.value(a), &column.value(b))));
}

/// `ceil(len / page_size)`, never less than 1
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Pull a 1-based page back into `1..=total_pages`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

pub fn paginate<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page_size == 0 {
        return rows.to_vec();
    }
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= rows.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(rows.len());
    rows[start..end].to_vec()
}

/// Result of running the whole pipeline for one render
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<T> {
    pub rows: Vec<T>,
    /// Rows left after filtering, before the page slice
    pub filtered_count: usize,
    pub total_pages: usize,
    /// Page actually shown (already clamped)
    pub page: usize,
}

impl<T> Default for PageView<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            filtered_count: 0,
            total_pages: 1,
            page: 1,
        }
    }
}

pub fn filtered_sorted_page<T: Clone>(
    data: &[T],
    columns: &[ColumnDef<T>],
    filters: &ColumnFilters,
    sort: Option<&SortConfig>,
    page: usize,
    page_size: usize,
) -> PageView<T> {
    let mut filtered = filter_rows(data, columns, filters);
    sort_rows(&mut filtered, columns, sort);

    let total = total_pages(filtered.len(), page_size);
    let page = clamp_page(page, total);

    PageView {
        rows: paginate(&filtered, page, page_size),
        filtered_count: filtered.len(),
        total_pages: total,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::controls::SortDirection;

    #[derive(Debug, Clone, PartialEq)]
    struct Account {
        bank_code: String,
        status: String,
        balance: String,
    }

    fn account(bank_code: &str, status: &str, balance: &str) -> Account {
        Account {
            bank_code: bank_code.into(),
            status: status.into(),
            balance: balance.into(),
        }
    }

    fn columns() -> Vec<ColumnDef<Account>> {
        vec![
            ColumnDef::new("bankCode", "Bank", |r: &Account| CellValue::text(r.bank_code.clone()))
                .text_filter(),
            ColumnDef::new("status", "Status", |r: &Account| CellValue::text(r.status.clone()))
                .select_filter(["ok", "blocked"]),
            ColumnDef::new("balance", "Balance", |r: &Account| CellValue::text(r.balance.clone()))
                .numeric(),
        ]
    }

    fn filters(pairs: &[(&str, &str)]) -> ColumnFilters {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_filter_always_passes() {
        for field in ["", "DBBL", "Order need to check", "১২৩"] {
            assert!(includes_value(field, ""));
            assert!(includes_value(field, "   "));
        }
    }

    #[test]
    fn test_includes_value_case_insensitive() {
        assert!(includes_value("DBBL", "db"));
        assert!(includes_value("bkash", "KASH"));
        assert!(!includes_value("NAGAD", "db"));
    }

    #[test]
    fn test_filter_composition() {
        let rows = vec![account("DBBL", "ok", "10"), account("BKASH", "ok", "20")];
        let result = filter_rows(&rows, &columns(), &filters(&[("bankCode", "db")]));
        assert_eq!(result, vec![rows[0].clone()]);
    }

    #[test]
    fn test_all_filters_must_match() {
        let rows = vec![
            account("DBBL", "ok", "10"),
            account("DBBL", "blocked", "20"),
            account("BKASH", "ok", "30"),
        ];
        let result = filter_rows(
            &rows,
            &columns(),
            &filters(&[("bankCode", "dbbl"), ("status", "ok"), ("unknown", "zzz")]),
        );
        assert_eq!(result, vec![rows[0].clone()]);
        assert_eq!(active_filter_count(&filters(&[("a", "x"), ("b", " ")])), 1);
    }

    #[test]
    fn test_hidden_column_leaves_no_active_filter() {
        use crate::shared::table::controls::TableControls;

        let all = columns();
        let rows = vec![account("DBBL", "ok", "10"), account("BKASH", "ok", "20")];
        let mut controls = TableControls::new(&all);
        let mut active = filters(&[("bankCode", "db")]);

        let shown = filtered_sorted_page(&rows, &controls.visible_columns(&all), &active, None, 1, 25);
        assert_eq!(shown.filtered_count, 1);

        if controls.hide_column("bankCode") {
            assert!(clear_column_filter(&mut active, "bankCode"));
        }
        let shown = filtered_sorted_page(&rows, &controls.visible_columns(&all), &active, None, 1, 25);
        assert_eq!(active_filter_count(&active), 0);
        assert_eq!(shown.filtered_count, 2);

        controls.show_column("bankCode");
        let shown = filtered_sorted_page(&rows, &controls.visible_columns(&all), &active, None, 1, 25);
        assert_eq!(shown.filtered_count, 2);
        assert!(!clear_column_filter(&mut active, "status"));
    }

    #[test]
    fn test_sort_numeric_first() {
        let mut rows = vec![
            account("A", "ok", "100"),
            account("B", "ok", "9"),
            account("C", "ok", "1,000"),
            account("D", "ok", ""),
        ];
        let sort = SortConfig::new("balance", SortDirection::Asc);
        sort_rows(&mut rows, &columns(), Some(&sort));
        let order: Vec<_> = rows.iter().map(|r| r.bank_code.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C", "D"]);

        let sort = SortConfig::new("balance", SortDirection::Desc);
        sort_rows(&mut rows, &columns(), Some(&sort));
        let order: Vec<_> = rows.iter().map(|r| r.bank_code.as_str()).collect();
        assert_eq!(order, vec!["D", "C", "A", "B"]);
    }

    #[test]
    fn test_sort_mixed_column_ignores_arrival_order() {
        let inputs = [
            ["2", "10", "1a"],
            ["2", "1a", "10"],
            ["10", "2", "1a"],
            ["10", "1a", "2"],
            ["1a", "2", "10"],
            ["1a", "10", "2"],
        ];
        let sort = SortConfig::new("balance", SortDirection::Asc);
        for input in inputs {
            let mut rows: Vec<_> = input.iter().map(|b| account("X", "ok", b)).collect();
            sort_rows(&mut rows, &columns(), Some(&sort));
            let order: Vec<_> = rows.iter().map(|r| r.balance.as_str()).collect();
            assert_eq!(order, vec!["2", "10", "1a"], "input {input:?}");
        }
        assert_eq!(
            compare_cells(&CellValue::text("abc"), &CellValue::Number(5.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_sort_text_is_stable_and_case_insensitive() {
        let mut rows = vec![
            account("nagad", "ok", "1"),
            account("BKASH", "ok", "2"),
            account("Nagad", "ok", "3"),
        ];
        let sort = SortConfig::new("bankCode", SortDirection::Asc);
        sort_rows(&mut rows, &columns(), Some(&sort));
        let balances: Vec<_> = rows.iter().map(|r| r.balance.as_str()).collect();
        assert_eq!(balances, vec!["2", "1", "3"]);
    }

    #[test]
    fn test_pagination_bounds() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(clamp_page(5, 3), 3);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 0), 1);
    }

    #[test]
    fn test_paginate_slices() {
        let rows: Vec<usize> = (1..=25).collect();
        assert_eq!(paginate(&rows, 1, 10), (1..=10).collect::<Vec<_>>());
        assert_eq!(paginate(&rows, 3, 10), (21..=25).collect::<Vec<_>>());
        assert!(paginate(&rows, 4, 10).is_empty());
    }

    #[test]
    fn test_pipeline_clamps_page() {
        let rows: Vec<Account> = (0..25)
            .map(|i| account("DBBL", "ok", &i.to_string()))
            .collect();
        let view = filtered_sorted_page(&rows, &columns(), &ColumnFilters::new(), None, 5, 10);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.page, 3);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.filtered_count, 25);
    }
}
