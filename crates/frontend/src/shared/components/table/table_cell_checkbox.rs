use contracts::shared::table::SelectionSet;
use leptos::prelude::*;
use thaw::*;

/// Row checkbox; clicks do not reach the row
#[component]
pub fn TableCellCheckbox(
    #[prop(into)]
    item_key: String,

    selection: RwSignal<SelectionSet>,

    /// Rows that may not be selected render a disabled box
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    let key_for_checked = item_key.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:disabled=disabled
                prop:checked=move || selection.with(|s| s.contains(&key_for_checked))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    selection.update(|s| s.set(item_key.clone(), checked));
                }
            />
        </TableCell>
    }
}
