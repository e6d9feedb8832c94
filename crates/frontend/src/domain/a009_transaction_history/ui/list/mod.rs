pub mod state;

use std::sync::Arc;

use self::state::create_state;
use crate::api::transaction;
use crate::shared::components::table::{ActiveFilterTags, ColumnMenu, DataTable, RowActions};
use crate::shared::components::{DateRangeInput, FilterPanel, PageHeader};
use crate::shared::fetch::{load_into, reject, report_action};
use crate::shared::icons::icon;
use crate::shared::list_state::pagination_view;
use crate::shared::modal::confirm;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::table_controls::{use_filtered_sorted_page, use_table_controls};
use crate::system::session::context::username;
use crate::system::session::use_session;
use contracts::domain::a009_transaction_history::{columns, HistoryQuery, ResendRequest, TransactionHistoryRow};
use contracts::shared::fetch_state::{FetchMode, FetchState};
use contracts::shared::validation::DateRange;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn row_key(row: &TransactionHistoryRow) -> String {
    row.key().to_string()
}

fn history_query(range: &DateRange, merchantcode: &str) -> HistoryQuery {
    let merchantcode = merchantcode.trim();
    HistoryQuery {
        datefrom: range.from_str_value(),
        dateto: range.to_str_value(),
        merchantcode: (!merchantcode.is_empty()).then(|| merchantcode.to_string()),
    }
}

#[component]
pub fn TransactionHistoryList() -> impl IntoView {
    let notifications = use_notifications();
    let session = use_session();
    let state = create_state();
    let chrome = state.chrome;
    let data = RwSignal::new(FetchState::<TransactionHistoryRow>::default());

    let table = use_table_controls(columns(), chrome.table_options());
    let rows = Signal::derive(move || data.with(|d| d.data.clone()));
    let page_view = use_filtered_sorted_page(rows, table, chrome.filters.into(), chrome.page, chrome.page_size.into());

    let load = move |mode: FetchMode| {
        let range = match DateRange::parse(&state.date_from.get_untracked(), &state.date_to.get_untracked()) {
            Ok(range) => range,
            Err(e) => return reject(notifications, e),
        };
        let query = history_query(&range, &state.merchantcode.get_untracked());
        load_into(data, mode, notifications, "transaction history", async move {
            transaction::fetch_history(&query).await
        });
    };

    Effect::new(move |_| {
        if !data.with_untracked(|d| d.loaded) {
            load(FetchMode::Loud);
        }
    });

    let resend = move |row: TransactionHistoryRow| {
        if !confirm(&format!("Resend callback for {} to {}?", row.futuretrxid, row.merchantcode)) {
            return;
        }
        let request = ResendRequest {
            futuretrxid: row.futuretrxid,
            user: username(session),
        };
        spawn_local(async move {
            let outcome = transaction::resend_callback(&request).await;
            if report_action(notifications, &outcome, "Callback sent") {
                load(FetchMode::Silent);
            }
        });
    };

    let row_actions: RowActions<TransactionHistoryRow> = Arc::new(move |row: &TransactionHistoryRow| {
        let row = row.clone();
        row.can_resend()
            .then(|| view! {
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| resend(row.clone())>
                    "Resend"
                </Button>
            })
            .into_any()
    });

    let loading = Signal::derive(move || data.with(|d| d.loading));
    let busy = Signal::derive(move || data.with(|d| d.is_busy()));

    view! {
        <PageFrame page_id="a009_transaction_history--list" category=PAGE_CAT_LIST>
            <PageHeader title="Transaction history">
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
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <DateRangeInput date_from=state.date_from date_to=state.date_to />
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Merchant"</Label>
                                <Input value=state.merchantcode placeholder="All merchants" />
                            </Flex>
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_history_query_drops_blank_merchant() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let range = DateRange::single_day(day);

        let all = history_query(&range, "   ");
        assert_eq!(all.datefrom, "2024-03-09");
        assert_eq!(all.merchantcode, None);

        let one = history_query(&range, " M01 ");
        assert_eq!(one.merchantcode.as_deref(), Some("M01"));
    }
}
