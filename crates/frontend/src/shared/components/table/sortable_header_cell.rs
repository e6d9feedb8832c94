//! Sortable table header cell
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Amount"
//!     sort_key="amount"
//!     sort=table.sort()
//!     on_sort=Callback::new(move |key: String| table.toggle_sort(&key))
//!     on_hide=Callback::new(move |key: String| table.hide_column(&key))
//!     align="right"
//! />
//! ```

use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::table::SortConfig;
use leptos::prelude::*;
use thaw::*;

/// Header click cycles asc -> desc -> none; the eye button hides the column
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    #[prop(into)]
    sort_key: String,

    #[prop(into)]
    sort: Signal<Option<SortConfig>>,

    on_sort: Callback<String>,

    #[prop(optional)]
    on_hide: Option<Callback<String>>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Header alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,

    #[prop(optional, default = true)]
    sortable: bool,
) -> impl IntoView {
    let key_for_click = sort_key.clone();
    let key_for_hide = sort_key.clone();
    let direction = Signal::derive(move || {
        sort.with(|s| s.as_ref().filter(|s| s.key == sort_key).map(|s| s.direction))
    });

    let handle_click = move |_| {
        if sortable {
            on_sort.run(key_for_click.clone());
        }
    };

    let header_style = match (align, sortable) {
        ("right", true) => "cursor: pointer; justify-content: flex-end;",
        ("right", false) => "justify-content: flex-end;",
        (_, true) => "cursor: pointer;",
        _ => "",
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width class="resizable">
            <div class="table__sortable-header" style=header_style on:click=handle_click>
                {label}
                {sortable.then(|| view! {
                    <span class=move || get_sort_class(direction.get())>
                        {move || get_sort_indicator(direction.get())}
                    </span>
                })}
                {on_hide.map(|on_hide| view! {
                    <span
                        class="table__hide-column"
                        title="Hide column"
                        on:click=move |e| {
                            e.stop_propagation();
                            on_hide.run(key_for_hide.clone());
                        }
                    >
                        {icon("eye-off")}
                    </span>
                })}
            </div>
        </TableHeaderCell>
    }
}
