pub mod state;

use std::sync::Arc;

use self::state::create_state;
use crate::api::withdraw;
use crate::shared::components::table::{ActiveFilterTags, ColumnMenu, DataTable, RowActions};
use crate::shared::components::{DateRangeInput, FilterPanel, PageHeader};
use crate::shared::fetch::{load_into, reject, report_action};
use crate::shared::icons::icon;
use crate::shared::list_state::pagination_view;
use crate::shared::modal::prompt;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::table_controls::{use_filtered_sorted_page, use_table_controls};
use crate::system::session::context::username;
use crate::system::session::use_session;
use contracts::domain::a002_withdraw_queue::{
    columns, CheckAutomationRequest, FailWithdrawRequest, WithdrawListQuery, WithdrawTransaction,
};
use contracts::shared::fetch_state::{FetchMode, FetchState};
use contracts::shared::validation::DateRange;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn row_key(row: &WithdrawTransaction) -> String {
    row.key().to_string()
}

#[component]
pub fn WithdrawQueueList() -> impl IntoView {
    let notifications = use_notifications();
    let session = use_session();
    let state = create_state();
    let chrome = state.chrome;
    let data = RwSignal::new(FetchState::<WithdrawTransaction>::default());

    let table = use_table_controls(columns(), chrome.table_options());
    let rows = Signal::derive(move || data.with(|d| d.data.clone()));
    let page_view = use_filtered_sorted_page(rows, table, chrome.filters.into(), chrome.page, chrome.page_size.into());

    let load = move |mode: FetchMode| {
        let range = match DateRange::parse(&state.date_from.get_untracked(), &state.date_to.get_untracked()) {
            Ok(range) => range,
            Err(e) => return reject(notifications, e),
        };
        let query = WithdrawListQuery {
            datefrom: range.from_str_value(),
            dateto: range.to_str_value(),
        };
        load_into(data, mode, notifications, "withdraw queue", async move {
            withdraw::fetch_withdraw_list(&query).await
        });
    };

    Effect::new(move |_| {
        if !data.with_untracked(|d| d.loaded) {
            load(FetchMode::Loud);
        }
    });

    let check_automation = move |row: WithdrawTransaction| {
        let request = CheckAutomationRequest {
            futuretrxid: row.futuretrxid,
        };
        spawn_local(async move {
            let outcome = withdraw::check_automation(&request).await;
            if report_action(notifications, &outcome, "Automation checked") {
                load(FetchMode::Silent);
            }
        });
    };

    let fail = move |row: WithdrawTransaction| {
        let Some(reason) = prompt(&format!("Reason for failing withdrawal {}", row.futuretrxid), "") else {
            return;
        };
        if reason.trim().is_empty() {
            return notifications.warning("Validation", "Please fill in a reason");
        }
        let request = FailWithdrawRequest {
            futuretrxid: row.futuretrxid,
            reason: reason.trim().to_string(),
            user: username(session),
        };
        spawn_local(async move {
            let outcome = withdraw::fail_withdraw(&request).await;
            if report_action(notifications, &outcome, "Withdrawal failed") {
                load(FetchMode::Silent);
            }
        });
    };

    let row_actions: RowActions<WithdrawTransaction> = Arc::new(move |row: &WithdrawTransaction| {
        let can_fail = session.with(|s| row.can_fail(s.as_ref()));
        let (r1, r2) = (row.clone(), row.clone());
        view! {
            <div class="table__row-actions">
                {row.is_pending().then(|| view! {
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| check_automation(r1.clone())>
                        "Check automation"
                    </Button>
                })}
                {can_fail.then(|| view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fail(r2.clone())>
                        "Fail"
                    </Button>
                })}
            </div>
        }
        .into_any()
    });

    let loading = Signal::derive(move || data.with(|d| d.loading));
    let busy = Signal::derive(move || data.with(|d| d.is_busy()));

    view! {
        <PageFrame page_id="a002_withdraw_queue--list" category=PAGE_CAT_LIST>
            <PageHeader title="Withdraw queue">
                <ColumnMenu table=table />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| load(FetchMode::Loud) disabled=busy>
                    {icon("refresh")}
                    {move || if busy.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    is_expanded=chrome.filter_expanded
                    active_filters_count=chrome.active_filter_count()
                    pagination_controls=move || pagination_view(chrome, page_view)
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <DateRangeInput date_from=state.date_from date_to=state.date_to />
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| load(FetchMode::Loud) disabled=busy>
                                "Search"
                            </Button>
                        </Flex>
                    }
                />

                <ActiveFilterTags table=table filters=chrome.filters />

                <DataTable
                    table=table
                    rows=Signal::derive(move || page_view.with(|v| v.rows.clone()))
                    filters=chrome.filters
                    key_of=row_key
                    row_actions=row_actions
                    loading=loading
                />
            </div>
        </PageFrame>
    }
}
