//! Select-all checkbox for the rows on the current page

use contracts::shared::table::SelectionSet;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Tri-state: unchecked, checked, indeterminate. Clicking selects or clears
/// every key in `keys` without touching keys on other pages.
#[component]
pub fn TableHeaderCheckbox(
    /// Keys of the selectable rows on screen
    #[prop(into)]
    keys: Signal<Vec<String>>,

    selection: RwSignal<SelectionSet>,
) -> impl IntoView {
    let checkbox_state = Signal::derive(move || {
        let keys = keys.get();
        selection.with(|sel| {
            let selected = keys.iter().filter(|k| sel.contains(k)).count();
            if selected == 0 {
                CheckboxState::Unchecked
            } else if selected == keys.len() {
                CheckboxState::Checked
            } else {
                CheckboxState::Indeterminate
            }
        })
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let state = checkbox_state.get();
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state, CheckboxState::Indeterminate));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:disabled=move || keys.with(Vec::is_empty)
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    let keys = keys.get_untracked();
                    selection.update(|s| s.set_all(keys, checked));
                }
            />
        </TableHeaderCell>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}
