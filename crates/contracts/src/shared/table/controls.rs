//! Column visibility and single-column sort state shared by every list screen.
//!
//! The screen keeps its own rows, filters, pagination and selection. This
//! type only owns the table chrome, and `reset_all` hands control back to the
//! screen through optional hooks so one "reset" button clears everything.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::column::Keyed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }
}

/// Screen-supplied callbacks run by [`TableControls::reset_all`]
#[derive(Default)]
pub struct ResetHooks<'a> {
    pub on_reset_filters: Option<&'a dyn Fn()>,
    pub on_reset_selection: Option<&'a dyn Fn()>,
}

impl ResetHooks<'_> {
    /// Filters first, then selection
    pub fn run(&self) {
        if let Some(reset_filters) = self.on_reset_filters {
            reset_filters();
        }
        if let Some(reset_selection) = self.on_reset_selection {
            reset_selection();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableControls {
    visibility: BTreeMap<String, bool>,
    sort: Option<SortConfig>,
}

impl TableControls {
    /// All columns start visible, no sort
    pub fn new<C: Keyed>(columns: &[C]) -> Self {
        Self {
            visibility: columns
                .iter()
                .map(|c| (c.key().to_string(), true))
                .collect(),
            sort: None,
        }
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.visibility.get(key) != Some(&false)
    }

    /// Columns whose visibility is not `false`, input order preserved
    pub fn visible_columns<C: Keyed + Clone>(&self, columns: &[C]) -> Vec<C> {
        columns
            .iter()
            .filter(|c| self.is_visible(c.key()))
            .cloned()
            .collect()
    }

    /// Idempotent; an unknown key is ignored. A sort on the hidden column is
    /// cleared since it no longer applies. Returns whether the key is known.
    pub fn hide_column(&mut self, key: &str) -> bool {
        let Some(visible) = self.visibility.get_mut(key) else {
            return false;
        };
        *visible = false;
        if self.sort.as_ref().is_some_and(|s| s.key == key) {
            self.sort = None;
        }
        true
    }

    pub fn show_column(&mut self, key: &str) {
        if let Some(visible) = self.visibility.get_mut(key) {
            *visible = true;
        }
    }

    pub fn hidden_keys(&self) -> Vec<String> {
        self.visibility
            .iter()
            .filter(|(_, visible)| !**visible)
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn hidden_count(&self) -> usize {
        self.visibility.values().filter(|v| !**v).count()
    }

    pub fn sort(&self) -> Option<&SortConfig> {
        self.sort.as_ref()
    }

    pub fn sort_direction_for(&self, key: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|s| s.key == key)
            .map(|s| s.direction)
    }

    /// `None` clears. Re-applying the active key and direction also clears,
    /// anything else replaces the sort wholesale.
    pub fn handle_sort(&mut self, key: &str, direction: Option<SortDirection>) {
        let Some(direction) = direction else {
            self.sort = None;
            return;
        };

        let same = self
            .sort
            .as_ref()
            .map(|s| s.key == key && s.direction == direction)
            .unwrap_or(false);

        self.sort = if same {
            None
        } else {
            Some(SortConfig::new(key, direction))
        };
    }

    /// Header click: asc -> desc -> none
    pub fn toggle_sort(&mut self, key: &str) {
        let next = match self.sort_direction_for(key) {
            None => Some(SortDirection::Asc),
            Some(SortDirection::Asc) => Some(SortDirection::Desc),
            Some(SortDirection::Desc) => None,
        };
        self.handle_sort(key, next);
    }

    /// Restores visibility and clears sort without touching screen state
    pub fn reset_chrome(&mut self) {
        for visible in self.visibility.values_mut() {
            *visible = true;
        }
        self.sort = None;
    }

    pub fn reset_all(&mut self, hooks: &ResetHooks<'_>) {
        self.reset_chrome();
        hooks.run();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::column::{CellValue, ColumnDef};
    use std::cell::RefCell;

    struct Row;

    fn columns() -> Vec<ColumnDef<Row>> {
        vec![
            ColumnDef::new("futuretrxid", "Future Trx ID", |_| CellValue::Empty),
            ColumnDef::new("account", "Account", |_| CellValue::Empty),
            ColumnDef::new("amount", "Amount", |_| CellValue::Empty),
        ]
    }

    fn keys(cols: &[ColumnDef<Row>]) -> Vec<&'static str> {
        cols.iter().map(|c| c.key).collect()
    }

    #[test]
    fn test_same_sort_twice_clears() {
        let mut controls = TableControls::new(&columns());
        controls.handle_sort("amount", Some(SortDirection::Asc));
        controls.handle_sort("amount", Some(SortDirection::Asc));
        assert_eq!(controls.sort(), None);
    }

    #[test]
    fn test_direction_change_replaces() {
        let mut controls = TableControls::new(&columns());
        controls.handle_sort("amount", Some(SortDirection::Asc));
        controls.handle_sort("amount", Some(SortDirection::Desc));
        assert_eq!(
            controls.sort(),
            Some(&SortConfig::new("amount", SortDirection::Desc))
        );

        controls.handle_sort("account", Some(SortDirection::Desc));
        assert_eq!(
            controls.sort(),
            Some(&SortConfig::new("account", SortDirection::Desc))
        );

        controls.handle_sort("account", None);
        assert_eq!(controls.sort(), None);
    }

    #[test]
    fn test_toggle_cycle() {
        let mut controls = TableControls::new(&columns());
        controls.toggle_sort("account");
        assert_eq!(controls.sort_direction_for("account"), Some(SortDirection::Asc));
        controls.toggle_sort("account");
        assert_eq!(controls.sort_direction_for("account"), Some(SortDirection::Desc));
        controls.toggle_sort("account");
        assert_eq!(controls.sort(), None);
    }

    #[test]
    fn test_hide_then_reset_restores_everything() {
        let cols = columns();
        let mut controls = TableControls::new(&cols);
        controls.hide_column("account");
        controls.hide_column("account");
        controls.hide_column("unknown");
        controls.handle_sort("amount", Some(SortDirection::Desc));

        assert_eq!(keys(&controls.visible_columns(&cols)), vec!["futuretrxid", "amount"]);
        assert_eq!(controls.hidden_count(), 1);

        controls.reset_all(&ResetHooks::default());
        assert_eq!(keys(&controls.visible_columns(&cols)), keys(&cols));
        assert_eq!(controls.sort(), None);
    }

    #[test]
    fn test_hiding_sorted_column_clears_sort() {
        let mut controls = TableControls::new(&columns());
        controls.handle_sort("amount", Some(SortDirection::Asc));
        assert!(controls.hide_column("account"));
        assert_eq!(
            controls.sort(),
            Some(&SortConfig::new("amount", SortDirection::Asc))
        );

        assert!(controls.hide_column("amount"));
        assert_eq!(controls.sort(), None);
        assert!(!controls.hide_column("unknown"));
    }

    #[test]
    fn test_unknown_key_is_visible() {
        let controls = TableControls::new(&columns());
        assert!(controls.is_visible("not-registered"));
    }

    #[test]
    fn test_reset_runs_hooks_once_in_order() {
        let calls = RefCell::new(Vec::new());
        let reset_filters = || calls.borrow_mut().push("filters");
        let reset_selection = || calls.borrow_mut().push("selection");

        let mut controls = TableControls::new(&columns());
        controls.hide_column("amount");
        controls.reset_all(&ResetHooks {
            on_reset_filters: Some(&reset_filters),
            on_reset_selection: Some(&reset_selection),
        });

        assert_eq!(*calls.borrow(), vec!["filters", "selection"]);
        assert!(controls.is_visible("amount"));
    }

    #[test]
    fn test_reset_with_only_selection_hook() {
        let calls = RefCell::new(0);
        let reset_selection = || *calls.borrow_mut() += 1;
        let mut controls = TableControls::new(&columns());
        controls.reset_all(&ResetHooks {
            on_reset_filters: None,
            on_reset_selection: Some(&reset_selection),
        });
        assert_eq!(*calls.borrow(), 1);
    }
}
