//! Client-side list state shared by every screen: column filters, selection
//! and the 1-based page cursor.

use contracts::shared::table::{
    active_filter_count, clear_column_filter, ColumnFilters, PageView, SelectionSet,
};
use leptos::prelude::*;

use super::components::PaginationControls;
use super::table_controls::TableOptions;

pub const DEFAULT_PAGE_SIZE: usize = 25;

#[derive(Clone, Copy)]
pub struct ListChrome {
    pub filters: RwSignal<ColumnFilters>,
    default_filters: StoredValue<ColumnFilters>,
    pub selection: RwSignal<SelectionSet>,
    pub page: RwSignal<usize>,
    pub page_size: RwSignal<usize>,
    pub filter_expanded: RwSignal<bool>,
}

impl ListChrome {
    pub fn new() -> Self {
        Self::with_default_filters(ColumnFilters::new())
    }

    /// Filters the screen starts with and returns to on reset
    pub fn with_default_filters(defaults: ColumnFilters) -> Self {
        Self {
            filters: RwSignal::new(defaults.clone()),
            default_filters: StoredValue::new(defaults),
            selection: RwSignal::new(SelectionSet::new()),
            page: RwSignal::new(1),
            page_size: RwSignal::new(DEFAULT_PAGE_SIZE),
            filter_expanded: RwSignal::new(true),
        }
    }

    pub fn reset_filters(&self) {
        self.filters.set(self.default_filters.get_value());
        self.page.set(1);
    }

    pub fn reset_selection(&self) {
        self.selection.update(SelectionSet::clear);
    }

    pub fn set_page_size(&self, size: usize) {
        self.page_size.set(size);
        self.page.set(1);
    }

    pub fn clear_filter(&self, key: &str) {
        let mut cleared = false;
        self.filters.update(|f| cleared = clear_column_filter(f, key));
        if cleared {
            self.page.set(1);
        }
    }

    /// Reset and hide hooks for `use_table_controls`
    pub fn table_options(&self) -> TableOptions {
        let this = *self;
        TableOptions::default()
            .on_reset_filters(move || this.reset_filters())
            .on_reset_selection(move || this.reset_selection())
            .on_hide_column(move |key| this.clear_filter(key))
    }

    pub fn active_filter_count(&self) -> Signal<usize> {
        let filters = self.filters;
        Signal::derive(move || filters.with(active_filter_count))
    }
}

impl Default for ListChrome {
    fn default() -> Self {
        Self::new()
    }
}

/// Pagination controls wired to the chrome and a computed page
pub fn pagination_view<T>(chrome: ListChrome, page_view: Memo<PageView<T>>) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    view! {
        <PaginationControls
            current_page=chrome.page
            total_pages=Signal::derive(move || page_view.with(|v| v.total_pages))
            total_count=Signal::derive(move || page_view.with(|v| v.filtered_count))
            page_size=chrome.page_size
            on_page_change=Callback::new(move |page| chrome.page.set(page))
            on_page_size_change=Callback::new(move |size| chrome.set_page_size(size))
        />
    }
}
