use crate::shared::components::FilterTag;
use crate::shared::table_controls::TableControlsHandle;
use contracts::shared::table::{find_column, ColumnFilters};
use leptos::prelude::*;

/// One removable chip per active column filter
#[component]
pub fn ActiveFilterTags<T>(table: TableControlsHandle<T>, filters: RwSignal<ColumnFilters>) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    let tags = move || {
        let columns = table.all_columns();
        filters.with(|f| {
            f.iter()
                .filter(|(_, value)| !value.trim().is_empty())
                .map(|(key, value)| {
                    let label = find_column(&columns, key).map(|c| c.label).unwrap_or(key.as_str());
                    (key.clone(), format!("{label}: {value}"))
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="filter-tags">
            {move || {
                tags()
                    .into_iter()
                    .map(|(key, label)| {
                        let on_remove = Callback::new(move |_| {
                            filters.update(|f| {
                                f.remove(&key);
                            })
                        });
                        view! { <FilterTag label=label on_remove=on_remove /> }
                    })
                    .collect_view()
            }}
        </div>
    }
}
