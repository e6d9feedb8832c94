pub mod state;

use std::sync::Arc;

use self::state::create_state;
use crate::api::transaction;
use crate::shared::components::table::{ActiveFilterTags, ColumnMenu, DataTable, RowActions};
use crate::shared::components::{DateRangeInput, FilterPanel, PageHeader};
use crate::shared::fetch::{load_into, reject, report_action};
use crate::shared::icons::icon;
use crate::shared::list_state::pagination_view;
use crate::shared::modal::{confirm, prompt, use_modal};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::table_controls::{use_filtered_sorted_page, use_table_controls};
use crate::system::session::context::username;
use crate::system::session::use_session;
use contracts::domain::a001_deposit_queue::{
    columns, ApproveDepositRequest, DepositPendingQuery, DepositTransaction, EditDepositRequest,
    ManualStatusRequest, MatchMutasiRequest, MatchSmsRequest, STATUS_FAILED,
};
use contracts::shared::fetch_state::{FetchMode, FetchState};
use contracts::shared::validation::DateRange;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn row_key(row: &DepositTransaction) -> String {
    row.key().to_string()
}

#[component]
pub fn DepositQueueList() -> impl IntoView {
    let notifications = use_notifications();
    let modal = use_modal();
    let session = use_session();
    let state = create_state();
    let chrome = state.chrome;
    let data = RwSignal::new(FetchState::<DepositTransaction>::default());

    let table = use_table_controls(columns(), chrome.table_options());
    let rows = Signal::derive(move || data.with(|d| d.data.clone()));
    let page_view = use_filtered_sorted_page(rows, table, chrome.filters.into(), chrome.page, chrome.page_size.into());

    let load = move |mode: FetchMode| {
        let range = match DateRange::parse(&state.date_from.get_untracked(), &state.date_to.get_untracked()) {
            Ok(range) => range,
            Err(e) => return reject(notifications, e),
        };
        let account = state.accountno.get_untracked().trim().to_string();
        let query = DepositPendingQuery {
            datefrom: range.from_str_value(),
            dateto: range.to_str_value(),
            accountno: (!account.is_empty()).then_some(account),
        };
        load_into(data, mode, notifications, "deposit queue", async move {
            transaction::fetch_deposit_pending(&query).await
        });
    };

    Effect::new(move |_| {
        if !data.with_untracked(|d| d.loaded) {
            load(FetchMode::Loud);
        }
    });

    let approve = move |row: DepositTransaction| {
        if !confirm(&format!("Approve deposit {} for {}?", row.futuretrxid, row.amount)) {
            return;
        }
        let request = ApproveDepositRequest {
            futuretrxid: row.futuretrxid,
            user: username(session),
        };
        spawn_local(async move {
            let outcome = transaction::approve_deposit(&request).await;
            if report_action(notifications, &outcome, "Deposit approved") {
                load(FetchMode::Silent);
            }
        });
    };

    let fail = move |row: DepositTransaction| {
        let Some(reason) = prompt(&format!("Reason for failing {}", row.futuretrxid), "") else {
            return;
        };
        let request = ManualStatusRequest {
            futuretrxid: row.futuretrxid,
            status: STATUS_FAILED.to_string(),
            notes: reason.trim().to_string(),
            user: username(session),
        };
        spawn_local(async move {
            let outcome = transaction::update_manual_status(&request).await;
            if report_action(notifications, &outcome, "Deposit failed") {
                load(FetchMode::Silent);
            }
        });
    };

    let match_mutasi = move |row: DepositTransaction| {
        let Some(mutasiid) = prompt(&format!("Mutasi ID to match with {}", row.futuretrxid), "") else {
            return;
        };
        if mutasiid.trim().is_empty() {
            return notifications.warning("Validation", "Please fill in Mutasi ID");
        }
        let request = MatchMutasiRequest {
            futuretrxid: row.futuretrxid,
            mutasiid: mutasiid.trim().to_string(),
            user: username(session),
        };
        spawn_local(async move {
            let outcome = transaction::match_mutasi(&request).await;
            if report_action(notifications, &outcome, "Matched with mutasi") {
                load(FetchMode::Silent);
            }
        });
    };

    let match_sms = move |row: DepositTransaction| {
        let Some(smsid) = prompt(&format!("SMS ID to match with {}", row.futuretrxid), "") else {
            return;
        };
        if smsid.trim().is_empty() {
            return notifications.warning("Validation", "Please fill in SMS ID");
        }
        let request = MatchSmsRequest {
            futuretrxid: row.futuretrxid,
            smsid: smsid.trim().to_string(),
            user: username(session),
        };
        spawn_local(async move {
            let outcome = transaction::match_sms(&request).await;
            if report_action(notifications, &outcome, "Matched with SMS") {
                load(FetchMode::Silent);
            }
        });
    };

    let edit = move |row: DepositTransaction| {
        spawn_local(async move {
            let initial = (row.amount.clone(), row.account().to_string());
            let outcome = modal
                .open(format!("Edit deposit {}", row.futuretrxid), move |handle| {
                    let amount = RwSignal::new(initial.0.clone());
                    let account = RwSignal::new(initial.1.clone());
                    view! {
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Amount"</Label>
                            <Input value=amount />
                            <Label>"Account"</Label>
                            <Input value=account />
                            <div class="modal-actions">
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.cancel()>
                                    "Cancel"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| handle.submit((amount.get_untracked(), account.get_untracked()))
                                >
                                    "Save"
                                </Button>
                            </div>
                        </Flex>
                    }
                })
                .await;

            let Some((amount, account)) = outcome.submitted() else {
                return;
            };
            let request = match EditDepositRequest::from_form(&row, &amount, &account, &username(session)) {
                Ok(request) => request,
                Err(e) => return reject(notifications, e),
            };
            let outcome = transaction::edit_deposit(&request).await;
            if report_action(notifications, &outcome, "Deposit updated") {
                load(FetchMode::Silent);
            }
        });
    };

    let row_actions: RowActions<DepositTransaction> = Arc::new(move |row: &DepositTransaction| {
        let can_validate = session.with(|s| row.validate(s.as_ref()));
        let can_match = row.can_match();
        let (r1, r2, r3, r4, r5) = (row.clone(), row.clone(), row.clone(), row.clone(), row.clone());
        view! {
            <div class="table__row-actions">
                {can_validate.then(|| view! {
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| approve(r1.clone())>
                        "Approve"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fail(r2.clone())>
                        "Fail"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| edit(r5.clone())>
                        "Edit"
                    </Button>
                })}
                {can_match.then(|| view! {
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| match_mutasi(r3.clone())>
                        "Match mutasi"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| match_sms(r4.clone())>
                        "Match SMS"
                    </Button>
                })}
            </div>
        }
        .into_any()
    });

    let loading = Signal::derive(move || data.with(|d| d.loading));
    let refreshing = Signal::derive(move || data.with(|d| d.is_busy()));

    view! {
        <PageFrame page_id="a001_deposit_queue--list" category=PAGE_CAT_LIST>
            <PageHeader title="Deposit queue">
                <ColumnMenu table=table />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| load(FetchMode::Loud)
                    disabled=refreshing
                >
                    {icon("refresh")}
                    {move || if refreshing.get() { " Loading..." } else { " Refresh" }}
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
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Account"</Label>
                                <Input value=state.accountno placeholder="All accounts" />
                            </Flex>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| load(FetchMode::Loud)
                                disabled=refreshing
                            >
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
