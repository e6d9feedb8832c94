use crate::shared::icons::icon;
use crate::shared::table_controls::TableControlsHandle;
use contracts::shared::table::SortDirection;
use leptos::prelude::*;
use thaw::*;

/// Dropdown listing hidden columns. Each can be shown again, visible sortable
/// columns get explicit asc/desc buttons, "Reset table" restores every
/// column, clears the sort and runs the screen reset hooks.
#[component]
pub fn ColumnMenu<T>(table: TableControlsHandle<T>) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    let is_open = RwSignal::new(false);
    let hidden_count = table.hidden_count();
    let sort = table.sort();
    let visible = table.visible_columns();

    let sort_button = move |key: &'static str, direction: SortDirection| {
        let active = move || {
            sort.with(|s| s.as_ref().is_some_and(|s| s.key == key && s.direction == direction))
        };
        view! {
            <span
                class=move || {
                    if active() {
                        "column-menu__sort column-menu__sort--active"
                    } else {
                        "column-menu__sort"
                    }
                }
                on:click=move |_| table.handle_sort(key, Some(direction))
            >
                {direction.indicator()}
            </span>
        }
    };

    let hidden_columns = move || {
        table
            .all_columns()
            .into_iter()
            .filter(|c| !table.is_visible(c.key))
            .map(|c| (c.key, c.label))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="column-menu">
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| is_open.update(|o| *o = !*o)
            >
                {icon("columns")}
                {move || match hidden_count.get() {
                    0 => "Columns".to_string(),
                    n => format!("Columns ({n} hidden)"),
                }}
            </Button>
            <Show when=move || is_open.get()>
                <div class="column-menu__dropdown">
                    {move || {
                        let hidden = hidden_columns();
                        if hidden.is_empty() {
                            view! { <div class="column-menu__empty">"All columns are visible"</div> }
                                .into_any()
                        } else {
                            hidden
                                .into_iter()
                                .map(|(key, label)| {
                                    view! {
                                        <div
                                            class="column-menu__item"
                                            on:click=move |_| table.show_column(key)
                                        >
                                            {label}
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                    <div class="column-menu__section">"Sort by"</div>
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .filter(|c| c.sortable)
                            .map(|c| {
                                view! {
                                    <div class="column-menu__sort-row">
                                        <span>{c.label}</span>
                                        {sort_button(c.key, SortDirection::Asc)}
                                        {sort_button(c.key, SortDirection::Desc)}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                    <Show when=move || sort.with(Option::is_some)>
                        <div
                            class="column-menu__item"
                            on:click=move |_| {
                                if let Some(active) = sort.get_untracked() {
                                    table.handle_sort(&active.key, None);
                                }
                            }
                        >
                            "Clear sort"
                        </div>
                    </Show>
                    <div class="column-menu__footer">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                table.reset_all();
                                is_open.set(false);
                            }
                        >
                            {icon("refresh")}
                            " Reset table"
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
