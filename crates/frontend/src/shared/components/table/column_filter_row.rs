use contracts::shared::table::{ColumnDef, ColumnFilterKind, ColumnFilters};
use leptos::prelude::*;
use thaw::*;

fn set_filter(filters: RwSignal<ColumnFilters>, key: &str, value: String) {
    filters.update(|f| {
        if value.trim().is_empty() {
            f.remove(key);
        } else {
            f.insert(key.to_string(), value);
        }
    });
}

/// Second header row with one filter input per visible column
#[component]
pub fn ColumnFilterRow<T>(
    #[prop(into)]
    columns: Signal<Vec<ColumnDef<T>>>,

    filters: RwSignal<ColumnFilters>,

    /// Leading checkbox column
    #[prop(optional)]
    has_selection: bool,

    /// Trailing actions column
    #[prop(optional)]
    has_actions: bool,
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    let render_filter = move |column: &ColumnDef<T>| {
        let key = column.key;
        let current = move || filters.with(|f| f.get(key).cloned().unwrap_or_default());
        match column.filter.clone() {
            Some(ColumnFilterKind::Text) => view! {
                <input
                    type="text"
                    class="table__filter-input"
                    placeholder="Filter..."
                    prop:value=current
                    on:input=move |ev| set_filter(filters, key, event_target_value(&ev))
                />
            }
            .into_any(),
            Some(ColumnFilterKind::Select(options)) => view! {
                <select
                    class="table__filter-select"
                    prop:value=current
                    on:change=move |ev| set_filter(filters, key, event_target_value(&ev))
                >
                    <option value="">"All"</option>
                    {options
                        .into_iter()
                        .map(|opt| view! { <option value=opt.clone()>{opt.clone()}</option> })
                        .collect_view()}
                </select>
            }
            .into_any(),
            None => ().into_any(),
        }
    };

    view! {
        <TableRow class="table__filter-row">
            {has_selection.then(|| view! { <TableHeaderCell resizable=false class="fixed-checkbox-column">""</TableHeaderCell> })}
            {move || {
                columns
                    .get()
                    .into_iter()
                    .map(|column| {
                        view! { <TableHeaderCell resizable=false>{render_filter(&column)}</TableHeaderCell> }
                    })
                    .collect_view()
            }}
            {has_actions.then(|| view! { <TableHeaderCell resizable=false>""</TableHeaderCell> })}
        </TableRow>
    }
}
