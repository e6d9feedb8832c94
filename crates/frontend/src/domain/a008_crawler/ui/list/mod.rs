//! Mutasi crawlers: last crawl per account, restart for stuck ones.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::crawler;
use crate::shared::components::table::{ActiveFilterTags, ColumnMenu, DataTable, RowActions};
use crate::shared::components::{AutoRefreshToggle, FilterPanel, PageHeader};
use crate::shared::fetch::{load_into, report_action};
use crate::shared::icons::icon;
use crate::shared::list_state::{pagination_view, ListChrome};
use crate::shared::modal::confirm;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_MONITOR;
use crate::shared::polling::use_polling;
use crate::shared::table_controls::{use_filtered_sorted_page, use_table_controls};
use crate::system::session::context::username;
use crate::system::session::use_session;
use contracts::domain::a008_crawler::{columns, CrawlerStatus, RestartCrawlerRequest, POLL_INTERVAL_MS};
use contracts::shared::fetch_state::{FetchMode, FetchState};

fn row_key(row: &CrawlerStatus) -> String {
    row.key().to_string()
}

fn render_cell(row: &CrawlerStatus, key: &'static str) -> Option<AnyView> {
    if key != "last_crawl" || !row.is_stale() {
        return None;
    }
    Some(
        view! {
            <span>
                {row.last_crawl.clone()}
                " "
                <span class="badge badge--warning">"stale"</span>
            </span>
        }
        .into_any(),
    )
}

#[component]
pub fn CrawlerList() -> impl IntoView {
    let notifications = use_notifications();
    let session = use_session();
    let chrome = ListChrome::new();
    let auto_refresh = RwSignal::new(true);
    let data = RwSignal::new(FetchState::<CrawlerStatus>::default());

    let table = use_table_controls(columns(), chrome.table_options());
    let rows = Signal::derive(move || data.with(|d| d.data.clone()));
    let page_view = use_filtered_sorted_page(rows, table, chrome.filters.into(), chrome.page, chrome.page_size.into());

    let load = move |mode: FetchMode| {
        load_into(data, mode, notifications, "crawler status", crawler::fetch_crawler_status());
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

    let restart = move |row: CrawlerStatus| {
        if !confirm(&format!("Restart crawler {} ({} {})?", row.id, row.bank, row.account)) {
            return;
        }
        let request = RestartCrawlerRequest {
            id: row.id,
            user: username(session),
        };
        spawn_local(async move {
            let outcome = crawler::restart_crawler(&request).await;
            if report_action(notifications, &outcome, "Restart requested") {
                load(FetchMode::Silent);
            }
        });
    };

    let row_actions: RowActions<CrawlerStatus> = Arc::new(move |row: &CrawlerStatus| {
        let row = row.clone();
        let appearance = if row.is_stale() {
            ButtonAppearance::Primary
        } else {
            ButtonAppearance::Subtle
        };
        view! {
            <Button appearance=appearance on_click=move |_| restart(row.clone())>
                "Restart"
            </Button>
        }
        .into_any()
    });

    let stale_count = Signal::derive(move || data.with(|d| d.data.iter().filter(|c| c.is_stale()).count()));
    let loading = Signal::derive(move || data.with(|d| d.loading));
    let busy = Signal::derive(move || data.with(|d| d.is_busy()));

    view! {
        <PageFrame page_id="a008_crawler--monitor" category=PAGE_CAT_MONITOR>
            <PageHeader
                title="Crawler status"
                subtitle=Signal::derive(move || match stale_count.get() {
                    0 => String::new(),
                    n => format!("{n} stale"),
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
                    row_actions=row_actions
                    loading=loading
                />
            </div>
        </PageFrame>
    }
}
