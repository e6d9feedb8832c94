pub mod state;

use std::sync::Arc;

use self::state::create_state;
use crate::api::mybank;
use crate::shared::components::table::{ActiveFilterTags, ColumnMenu, DataTable, RowActions};
use crate::shared::components::{FilterPanel, PageHeader};
use crate::shared::fetch::{load_into, report_action};
use crate::shared::icons::icon;
use crate::shared::list_state::pagination_view;
use crate::shared::modal::{confirm, use_modal};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::table_controls::{use_filtered_sorted_page, use_table_controls};
use crate::system::session::context::{use_is_supervisor, username};
use crate::system::session::use_session;
use contracts::domain::a003_my_bank::{
    columns, BankAccount, MasterBank, MasterIbft, MyBankQuery, ToggleActiveRequest, UpdateMemoRequest,
};
use contracts::shared::fetch_state::{FetchMode, FetchState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn row_key(row: &BankAccount) -> String {
    row.key()
}

/// Bank selector options: master banks, flagged when they also take IBFT
pub fn bank_options(masters: &[MasterBank], ibft: &[MasterIbft]) -> Vec<(String, String)> {
    masters
        .iter()
        .map(|bank| {
            let supports_ibft = ibft.iter().any(|i| i.code.eq_ignore_ascii_case(&bank.bankcode));
            let name = if bank.bankname.is_empty() { &bank.bankcode } else { &bank.bankname };
            let label = if supports_ibft {
                format!("{name} (IBFT)")
            } else {
                name.to_string()
            };
            (bank.bankcode.clone(), label)
        })
        .collect()
}

#[component]
pub fn MyBankList() -> impl IntoView {
    let notifications = use_notifications();
    let modal = use_modal();
    let session = use_session();
    let is_supervisor = use_is_supervisor();
    let state = create_state();
    let chrome = state.chrome;
    let data = RwSignal::new(FetchState::<BankAccount>::default());
    let masters = RwSignal::new(FetchState::<MasterBank>::default());
    let ibft = RwSignal::new(FetchState::<MasterIbft>::default());

    let table = use_table_controls(columns(), chrome.table_options());
    let rows = Signal::derive(move || data.with(|d| d.data.clone()));
    let page_view = use_filtered_sorted_page(rows, table, chrome.filters.into(), chrome.page, chrome.page_size.into());

    let load = move |mode: FetchMode| {
        let bank = state.bank.get_untracked();
        let query = MyBankQuery {
            bank: (!bank.is_empty()).then_some(bank),
        };
        load_into(data, mode, notifications, "my bank", async move {
            mybank::fetch_my_bank(&query).await
        });
    };

    Effect::new(move |_| {
        if !data.with_untracked(|d| d.loaded) {
            load(FetchMode::Loud);
            load_into(masters, FetchMode::Silent, notifications, "master banks", mybank::fetch_master_banks());
            load_into(ibft, FetchMode::Silent, notifications, "master ibft", mybank::fetch_master_ibft());
        }
    });

    let options = Signal::derive(move || masters.with(|m| ibft.with(|i| bank_options(&m.data, &i.data))));

    let edit_memo = move |row: BankAccount| {
        spawn_local(async move {
            let initial = row.memo_decoded();
            let outcome = modal
                .open(format!("Memo for {} {}", row.bank, row.account), move |handle| {
                    let memo = RwSignal::new(initial.clone());
                    view! {
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Memo"</Label>
                            <Textarea value=memo />
                            <div class="modal-actions">
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.cancel()>
                                    "Cancel"
                                </Button>
                                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle.submit(memo.get_untracked())>
                                    "Save"
                                </Button>
                            </div>
                        </Flex>
                    }
                })
                .await;

            let Some(memo) = outcome.submitted() else {
                return;
            };
            let request = UpdateMemoRequest::new(&row, &memo, &username(session));
            let outcome = mybank::update_memo(&request).await;
            if report_action(notifications, &outcome, "Memo saved") {
                load(FetchMode::Silent);
            }
        });
    };

    let toggle_active = move |row: BankAccount| {
        let verb = if row.is_active() { "Deactivate" } else { "Activate" };
        if !confirm(&format!("{verb} {} {}?", row.bank, row.account)) {
            return;
        }
        let request = ToggleActiveRequest::flip(&row, &username(session));
        spawn_local(async move {
            let outcome = mybank::toggle_active(&request).await;
            if report_action(notifications, &outcome, "Account updated") {
                load(FetchMode::Silent);
            }
        });
    };

    let row_actions: RowActions<BankAccount> = Arc::new(move |row: &BankAccount| {
        let (r1, r2) = (row.clone(), row.clone());
        let toggle_label = if row.is_active() { "Deactivate" } else { "Activate" };
        view! {
            <div class="table__row-actions">
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| edit_memo(r1.clone())>
                    "Memo"
                </Button>
                {is_supervisor.get().then(|| view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| toggle_active(r2.clone())>
                        {toggle_label}
                    </Button>
                })}
            </div>
        }
        .into_any()
    });

    let loading = Signal::derive(move || data.with(|d| d.loading));
    let busy = Signal::derive(move || data.with(|d| d.is_busy()));

    view! {
        <PageFrame page_id="a003_my_bank--list" category=PAGE_CAT_LIST>
            <PageHeader title="My bank accounts">
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
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Bank"</Label>
                                <select
                                    class="filter-select"
                                    prop:value=move || state.bank.get()
                                    on:change=move |ev| {
                                        state.bank.set(event_target_value(&ev));
                                        load(FetchMode::Loud);
                                    }
                                >
                                    <option value="">"All banks"</option>
                                    {move || options.get().into_iter().map(|(code, label)| view! {
                                        <option value=code>{label}</option>
                                    }).collect_view()}
                                </select>
                            </Flex>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_options_flag_ibft() {
        let masters = vec![
            MasterBank {
                bankcode: "BCA".into(),
                bankname: "Bank Central Asia".into(),
            },
            MasterBank {
                bankcode: "NAGAD".into(),
                bankname: String::new(),
            },
        ];
        let ibft = vec![MasterIbft {
            code: "bca".into(),
            name: "BCA".into(),
        }];

        let options = bank_options(&masters, &ibft);
        assert_eq!(options[0], ("BCA".to_string(), "Bank Central Asia (IBFT)".to_string()));
        assert_eq!(options[1], ("NAGAD".to_string(), "NAGAD".to_string()));
    }
}
