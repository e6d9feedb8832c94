//! Bulk assignment of pending withdrawals to one source (agent) account.

pub mod state;

use self::state::create_state;
use crate::api::{mybank, withdraw};
use crate::shared::batch_runner::run_batches;
use crate::shared::components::table::{ActiveFilterTags, BatchProgressOverlay, ColumnMenu, DataTable};
use crate::shared::components::{DateRangeInput, FilterPanel, PageHeader};
use crate::shared::fetch::{load_into, reject};
use crate::shared::icons::icon;
use crate::shared::list_state::pagination_view;
use crate::shared::modal::confirm;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::table_controls::{retain_selection, use_filtered_sorted_page, use_table_controls};
use crate::system::session::context::username;
use crate::system::session::use_session;
use contracts::domain::a002_withdraw_queue::{
    columns, AssignWithdrawRequest, WithdrawListQuery, WithdrawTransaction,
};
use contracts::domain::a003_my_bank::{BankAccount, MyBankQuery};
use contracts::shared::batch::BatchPlan;
use contracts::shared::fetch_state::{FetchMode, FetchState};
use contracts::shared::validation::{DateRange, ValidationError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn row_key(row: &WithdrawTransaction) -> String {
    row.key().to_string()
}

fn assignable(row: &WithdrawTransaction) -> bool {
    row.can_assign()
}

/// Build one request per selected, still assignable row
pub fn assignment_requests(
    rows: &[WithdrawTransaction],
    selected: impl Fn(&str) -> bool,
    source: &BankAccount,
    user: &str,
) -> Vec<AssignWithdrawRequest> {
    rows.iter()
        .filter(|row| row.can_assign() && selected(row.key()))
        .map(|row| AssignWithdrawRequest {
            futuretrxid: row.futuretrxid.clone(),
            accountsrc: source.account.clone(),
            banksrc: source.bank.clone(),
            user: user.to_string(),
        })
        .collect()
}

#[component]
pub fn WithdrawAssignPage() -> impl IntoView {
    let notifications = use_notifications();
    let session = use_session();
    let state = create_state();
    let chrome = state.chrome;
    let data = RwSignal::new(FetchState::<WithdrawTransaction>::default());
    let accounts = RwSignal::new(FetchState::<BankAccount>::default());

    let table = use_table_controls(columns(), chrome.table_options());
    let rows = Signal::derive(move || data.with(|d| d.data.clone()));
    let page_view = use_filtered_sorted_page(rows, table, chrome.filters.into(), chrome.page, chrome.page_size.into());
    retain_selection(rows, chrome.selection, row_key);

    let load = move |mode: FetchMode| {
        let range = match DateRange::parse(&state.date_from.get_untracked(), &state.date_to.get_untracked()) {
            Ok(range) => range,
            Err(e) => return reject(notifications, e),
        };
        let query = WithdrawListQuery {
            datefrom: range.from_str_value(),
            dateto: range.to_str_value(),
        };
        load_into(data, mode, notifications, "withdraw assign", async move {
            withdraw::fetch_withdraw_list(&query).await
        });
    };

    Effect::new(move |_| {
        if !data.with_untracked(|d| d.loaded) {
            load(FetchMode::Loud);
            load_into(accounts, FetchMode::Silent, notifications, "source accounts", async move {
                mybank::fetch_my_bank(&MyBankQuery { bank: None }).await
            });
        }
    });

    let active_accounts = Signal::derive(move || {
        accounts.with(|a| a.data.iter().filter(|acc| acc.is_active()).cloned().collect::<Vec<_>>())
    });

    let assign = move || {
        if chrome.selection.with_untracked(|s| s.is_empty()) {
            return reject(notifications, ValidationError::EmptySelection);
        }
        let source_key = state.source_key.get_untracked();
        let Some(source) = accounts.with_untracked(|a| a.data.iter().find(|acc| acc.key() == source_key).cloned()) else {
            return reject(notifications, ValidationError::MissingField("Source account"));
        };

        let requests = data.with_untracked(|d| {
            chrome
                .selection
                .with_untracked(|sel| assignment_requests(&d.data, |k| sel.contains(k), &source, &username(session)))
        });
        if requests.is_empty() {
            return reject(notifications, ValidationError::EmptySelection);
        }
        if !confirm(&format!(
            "Assign {} withdrawal(s) to {} {}?",
            requests.len(),
            source.bank,
            source.account
        )) {
            return;
        }

        spawn_local(async move {
            let plan = BatchPlan::with_defaults(requests);
            let result = run_batches(plan, state.progress, |request: AssignWithdrawRequest| async move {
                matches!(withdraw::assign_withdraw(&request).await, Ok(r) if r.is_ok())
            })
            .await;

            notifications.notify(result.summary("Assign"));
            chrome.reset_selection();
            load(FetchMode::Silent);
        });
    };

    let running = Signal::derive(move || state.progress.with(Option::is_some));
    let busy = Signal::derive(move || data.with(|d| d.is_busy()) || running.get());
    let loading = Signal::derive(move || data.with(|d| d.loading));

    view! {
        <PageFrame page_id="a002_withdraw_queue--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title="Withdraw assignment">
                <ColumnMenu table=table />
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load(FetchMode::Loud) disabled=busy>
                    {icon("refresh")}
                    " Refresh"
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

                <div class="bulk-toolbar">
                    <Label>"Source account"</Label>
                    <select
                        class="bulk-toolbar__select"
                        prop:value=move || state.source_key.get()
                        on:change=move |ev| state.source_key.set(event_target_value(&ev))
                    >
                        <option value="">"Choose account..."</option>
                        {move || active_accounts.get().into_iter().map(|acc| {
                            let label = format!("{} {} ({})", acc.bank, acc.account, acc.name);
                            view! { <option value=acc.key()>{label}</option> }
                        }).collect_view()}
                    </select>
                    <span class="bulk-toolbar__count">
                        {move || format!("{} selected", chrome.selection.with(|s| s.len()))}
                    </span>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| assign() disabled=busy>
                        "Assign selected"
                    </Button>
                </div>

                <ActiveFilterTags table=table filters=chrome.filters />

                <DataTable
                    table=table
                    rows=Signal::derive(move || page_view.with(|v| v.rows.clone()))
                    filters=chrome.filters
                    key_of=row_key
                    selection=chrome.selection
                    selectable=assignable
                    loading=loading
                />
            </div>

            <BatchProgressOverlay progress=state.progress title="Assigning withdrawals" />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn withdrawal(id: &str, status: &str, accountsrc: &str) -> WithdrawTransaction {
        WithdrawTransaction {
            futuretrxid: id.into(),
            status: status.into(),
            accountsrc: accountsrc.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_assignment_requests_skip_unassignable_rows() {
        let rows = vec![
            withdrawal("1", "Pending", ""),
            withdrawal("2", "Pending", "999"),
            withdrawal("3", "Transaction Success", ""),
            withdrawal("4", "On Process", ""),
        ];
        let source = BankAccount {
            account: "123".into(),
            bank: "BCA".into(),
            ..Default::default()
        };

        let requests = assignment_requests(&rows, |_| true, &source, "sup");
        let ids: Vec<_> = requests.iter().map(|r| r.futuretrxid.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
        assert_eq!(requests[0].banksrc, "BCA");

        let only_four = assignment_requests(&rows, |k| k == "4", &source, "sup");
        assert_eq!(only_four.len(), 1);
    }
}
