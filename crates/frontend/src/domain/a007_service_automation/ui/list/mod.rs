//! Automation workers per agent account, with an on/off switch.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::service_automation;
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
use contracts::domain::a007_service_automation::{
    columns, AutomationStatus, ToggleAutomationRequest, POLL_INTERVAL_MS,
};
use contracts::shared::fetch_state::{FetchMode, FetchState};

fn row_key(row: &AutomationStatus) -> String {
    row.key()
}

fn render_cell(row: &AutomationStatus, key: &'static str) -> Option<AnyView> {
    match key {
        "active" => {
            let (class, label) = if row.is_active() {
                ("badge badge--success", "On")
            } else {
                ("badge badge--neutral", "Off")
            };
            Some(view! { <span class=class>{label}</span> }.into_any())
        }
        "error" if !row.error.trim().is_empty() => {
            Some(view! { <span class="text-danger">{row.error.clone()}</span> }.into_any())
        }
        _ => None,
    }
}

#[component]
pub fn ServiceAutomationList() -> impl IntoView {
    let notifications = use_notifications();
    let session = use_session();
    let chrome = ListChrome::new();
    let auto_refresh = RwSignal::new(true);
    let data = RwSignal::new(FetchState::<AutomationStatus>::default());

    let table = use_table_controls(columns(), chrome.table_options());
    let rows = Signal::derive(move || data.with(|d| d.data.clone()));
    let page_view = use_filtered_sorted_page(rows, table, chrome.filters.into(), chrome.page, chrome.page_size.into());

    let load = move |mode: FetchMode| {
        load_into(
            data,
            mode,
            notifications,
            "service automation",
            service_automation::fetch_automation_status(),
        );
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

    let toggle = move |row: AutomationStatus| {
        let verb = if row.is_active() { "Stop" } else { "Start" };
        if !confirm(&format!("{verb} {} automation for {} {}?", row.service, row.bank, row.account)) {
            return;
        }
        let request = ToggleAutomationRequest::flip(&row, &username(session));
        spawn_local(async move {
            let outcome = service_automation::toggle_automation(&request).await;
            if report_action(notifications, &outcome, "Automation updated") {
                load(FetchMode::Silent);
            }
        });
    };

    let row_actions: RowActions<AutomationStatus> = Arc::new(move |row: &AutomationStatus| {
        let row = row.clone();
        let (appearance, label) = if row.is_active() {
            (ButtonAppearance::Secondary, "Stop")
        } else {
            (ButtonAppearance::Primary, "Start")
        };
        view! {
            <Button appearance=appearance on_click=move |_| toggle(row.clone())>
                {label}
            </Button>
        }
        .into_any()
    });

    let active_count = Signal::derive(move || data.with(|d| d.data.iter().filter(|r| r.is_active()).count()));
    let loading = Signal::derive(move || data.with(|d| d.loading));
    let busy = Signal::derive(move || data.with(|d| d.is_busy()));

    view! {
        <PageFrame page_id="a007_service_automation--monitor" category=PAGE_CAT_MONITOR>
            <PageHeader
                title="Service automation"
                subtitle=Signal::derive(move || {
                    format!("{} of {} running", active_count.get(), data.with(|d| d.data.len()))
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
