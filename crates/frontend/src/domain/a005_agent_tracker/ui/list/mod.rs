//! Agent heartbeat board, refreshed in the background.

use chrono::Local;
use leptos::prelude::*;
use thaw::*;

use crate::api::agent_tracker;
use crate::shared::components::table::{ActiveFilterTags, ColumnMenu, DataTable};
use crate::shared::components::{AutoRefreshToggle, FilterPanel, PageHeader};
use crate::shared::fetch::load_into;
use crate::shared::icons::icon;
use crate::shared::list_state::{pagination_view, ListChrome};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_MONITOR;
use crate::shared::polling::use_polling;
use crate::shared::table_controls::{use_filtered_sorted_page, use_table_controls};
use contracts::domain::a005_agent_tracker::{columns, AgentActivity, POLL_INTERVAL_MS};
use contracts::shared::fetch_state::{FetchMode, FetchState};

fn row_key(row: &AgentActivity) -> String {
    row.key()
}

fn render_cell(row: &AgentActivity, key: &'static str) -> Option<AnyView> {
    if key != "last_activity" {
        return None;
    }
    let online = row.is_online(Local::now().naive_local());
    let (class, label) = if online {
        ("badge badge--success", "online")
    } else {
        ("badge badge--danger", "offline")
    };
    Some(
        view! {
            <span>
                {row.last_activity.clone()}
                " "
                <span class=class>{label}</span>
            </span>
        }
        .into_any(),
    )
}

#[component]
pub fn AgentTrackerList() -> impl IntoView {
    let notifications = use_notifications();
    let chrome = ListChrome::new();
    let auto_refresh = RwSignal::new(true);
    let data = RwSignal::new(FetchState::<AgentActivity>::default());

    let table = use_table_controls(columns(), chrome.table_options());
    let rows = Signal::derive(move || data.with(|d| d.data.clone()));
    let page_view = use_filtered_sorted_page(rows, table, chrome.filters.into(), chrome.page, chrome.page_size.into());

    let load = move |mode: FetchMode| {
        load_into(data, mode, notifications, "agent tracker", agent_tracker::fetch_agent_activity());
    };

    Effect::new(move |_| {
        if !data.with_untracked(|d| d.loaded) {
            load(FetchMode::Loud);
        }
    });
    use_polling(
        POLL_INTERVAL_MS,
        Signal::derive(move || !auto_refresh.get()),
        move || load(FetchMode::Silent),
    );

    let online_count = Signal::derive(move || {
        let now = Local::now().naive_local();
        data.with(|d| d.data.iter().filter(|a| a.is_online(now)).count())
    });
    let loading = Signal::derive(move || data.with(|d| d.loading));
    let busy = Signal::derive(move || data.with(|d| d.is_busy()));

    view! {
        <PageFrame page_id="a005_agent_tracker--monitor" category=PAGE_CAT_MONITOR>
            <PageHeader
                title="Agent tracker"
                subtitle=Signal::derive(move || {
                    format!("{} of {} online", online_count.get(), data.with(|d| d.data.len()))
                })
            >
                <AutoRefreshToggle enabled=auto_refresh interval_ms=POLL_INTERVAL_MS />
                <ColumnMenu table=table />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| load(FetchMode::Loud) disabled=busy>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    is_expanded=chrome.filter_expanded
                    active_filters_count=chrome.active_filter_count()
                    pagination_controls=move || pagination_view(chrome, page_view)
                    filter_content=move || view! { <ActiveFilterTags table=table filters=chrome.filters /> }
                />

                <DataTable
                    table=table
                    rows=Signal::derive(move || page_view.with(|v| v.rows.clone()))
                    filters=chrome.filters
                    key_of=row_key
                    render_cell=render_cell
                    loading=loading
                />
            </div>
        </PageFrame>
    }
}
