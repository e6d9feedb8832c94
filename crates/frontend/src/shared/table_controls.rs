//! Reactive wrapper around the table chrome shared by every list screen.
//!
//! ```rust,ignore
//! let filters = RwSignal::new(ColumnFilters::new());
//! let selection = RwSignal::new(SelectionSet::new());
//! let table = use_table_controls(
//!     columns(),
//!     TableOptions::default()
//!         .on_reset_filters(move || filters.set(ColumnFilters::new()))
//!         .on_reset_selection(move || selection.update(SelectionSet::clear)),
//! );
//! let page = use_filtered_sorted_page(data, table, filters.into(), current_page, page_size.into());
//! ```

use contracts::shared::table::{
    filtered_sorted_page, ColumnDef, ColumnFilters, PageView, ResetHooks, SelectionSet, SortConfig,
    SortDirection, TableControls,
};
use leptos::prelude::*;

/// Screen hooks run after the chrome has been reset or a column hidden
#[derive(Default, Clone, Copy)]
pub struct TableOptions {
    on_reset_filters: Option<Callback<()>>,
    on_reset_selection: Option<Callback<()>>,
    on_hide_column: Option<Callback<String>>,
}

impl TableOptions {
    pub fn on_reset_filters(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_reset_filters = Some(Callback::new(move |_| f()));
        self
    }

    pub fn on_reset_selection(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_reset_selection = Some(Callback::new(move |_| f()));
        self
    }

    /// Receives the key of a column that was just hidden
    pub fn on_hide_column(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_hide_column = Some(Callback::new(move |key: String| f(&key)));
        self
    }
}

pub struct TableControlsHandle<T: 'static> {
    columns: StoredValue<Vec<ColumnDef<T>>>,
    state: RwSignal<TableControls>,
    options: TableOptions,
}

impl<T: 'static> Clone for TableControlsHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for TableControlsHandle<T> {}

pub fn use_table_controls<T: 'static>(
    columns: Vec<ColumnDef<T>>,
    options: TableOptions,
) -> TableControlsHandle<T> {
    let state = RwSignal::new(TableControls::new(&columns));
    TableControlsHandle {
        columns: StoredValue::new(columns),
        state,
        options,
    }
}

impl<T: 'static> TableControlsHandle<T> {
    pub fn all_columns(&self) -> Vec<ColumnDef<T>> {
        self.columns.with_value(|c| c.clone())
    }

    pub fn visible_columns(&self) -> Signal<Vec<ColumnDef<T>>> {
        let this = *self;
        Signal::derive(move || {
            this.state
                .with(|s| this.columns.with_value(|columns| s.visible_columns(columns)))
        })
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.state.with(|s| s.is_visible(key))
    }

    /// Hidden columns stop filtering and sorting, so the screen drops their filter too
    pub fn hide_column(&self, key: &str) {
        let mut known = false;
        self.state.update(|s| known = s.hide_column(key));
        if let (true, Some(cb)) = (known, self.options.on_hide_column) {
            cb.run(key.to_string());
        }
    }

    pub fn show_column(&self, key: &str) {
        self.state.update(|s| s.show_column(key));
    }

    pub fn hidden_count(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(TableControls::hidden_count))
    }

    pub fn sort(&self) -> Signal<Option<SortConfig>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.sort().cloned()))
    }

    /// `None` clears; the active key and direction again also clears
    pub fn handle_sort(&self, key: &str, direction: Option<SortDirection>) {
        self.state.update(|s| s.handle_sort(key, direction));
    }

    pub fn toggle_sort(&self, key: &str) {
        self.state.update(|s| s.toggle_sort(key));
    }

    /// Chrome first, then the screen's filters, then its selection
    pub fn reset_all(&self) {
        self.state.update(TableControls::reset_chrome);

        let reset_filters = self.options.on_reset_filters.map(|cb| move || cb.run(()));
        let reset_selection = self.options.on_reset_selection.map(|cb| move || cb.run(()));
        ResetHooks {
            on_reset_filters: reset_filters.as_ref().map(|f| f as &dyn Fn()),
            on_reset_selection: reset_selection.as_ref().map(|f| f as &dyn Fn()),
        }
        .run();
    }
}

/// Filter, sort and paginate `data` against the visible columns.
///
/// The current page is pulled back into range whenever the filtered count
/// shrinks below it.
pub fn use_filtered_sorted_page<T>(
    data: Signal<Vec<T>>,
    table: TableControlsHandle<T>,
    filters: Signal<ColumnFilters>,
    page: RwSignal<usize>,
    page_size: Signal<usize>,
) -> Memo<PageView<T>>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let visible = table.visible_columns();
    let sort = table.sort();

    let view = Memo::new(move |_| {
        let columns = visible.get();
        let sort = sort.get();
        data.with(|rows| {
            filters.with(|f| {
                filtered_sorted_page(rows, &columns, f, sort.as_ref(), page.get(), page_size.get())
            })
        })
    });

    Effect::new(move |_| {
        let clamped = view.with(|v| v.page);
        if page.get_untracked() != clamped {
            page.set(clamped);
        }
    });

    view
}

/// Drop selected keys whose rows disappeared after a reload
pub fn retain_selection<T>(
    data: Signal<Vec<T>>,
    selection: RwSignal<SelectionSet>,
    key_of: fn(&T) -> String,
) where
    T: Send + Sync + 'static,
{
    Effect::new(move |_| {
        let keys: Vec<String> = data.with(|rows| rows.iter().map(key_of).collect());
        selection.update(|s| s.retain_visible(&keys));
    });
}
