pub mod state;

use std::sync::Arc;

use self::state::create_state;
use crate::api::service_nagad;
use crate::shared::batch_runner::run_batches;
use crate::shared::components::table::{
    ActiveFilterTags, BatchProgressOverlay, ColumnMenu, DataTable, RowActions,
};
use crate::shared::components::{DateRangeInput, FilterPanel, PageHeader};
use crate::shared::fetch::{load_into, reject, report_action};
use crate::shared::icons::icon;
use crate::shared::list_state::pagination_view;
use crate::shared::modal::confirm;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::table_controls::{retain_selection, use_filtered_sorted_page, use_table_controls};
use crate::system::session::context::username;
use crate::system::session::use_session;
use contracts::domain::a006_service_nagad::{columns, NagadListQuery, NagadServiceRow, ResubmitRequest};
use contracts::shared::batch::BatchPlan;
use contracts::shared::fetch_state::{FetchMode, FetchState};
use contracts::shared::table::SelectionSet;
use contracts::shared::validation::{DateRange, ValidationError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn row_key(row: &NagadServiceRow) -> String {
    row.key().to_string()
}

fn resubmittable(row: &NagadServiceRow) -> bool {
    row.can_resubmit()
}

/// Requests for the selected rows that may still be resubmitted
pub fn resubmit_requests(rows: &[NagadServiceRow], selection: &SelectionSet, user: &str) -> Vec<ResubmitRequest> {
    rows.iter()
        .filter(|row| row.can_resubmit() && selection.contains(row.key()))
        .map(|row| ResubmitRequest {
            futuretrxid: row.futuretrxid.clone(),
            user: user.to_string(),
        })
        .collect()
}

#[component]
pub fn ServiceNagadList() -> impl IntoView {
    let notifications = use_notifications();
    let session = use_session();
    let state = create_state();
    let chrome = state.chrome;
    let data = RwSignal::new(FetchState::<NagadServiceRow>::default());

    let table = use_table_controls(columns(), chrome.table_options());
    let rows = Signal::derive(move || data.with(|d| d.data.clone()));
    let page_view = use_filtered_sorted_page(rows, table, chrome.filters.into(), chrome.page, chrome.page_size.into());
    retain_selection(rows, chrome.selection, row_key);

    let load = move |mode: FetchMode| {
        let range = match DateRange::parse(&state.date_from.get_untracked(), &state.date_to.get_untracked()) {
            Ok(range) => range,
            Err(e) => return reject(notifications, e),
        };
        let query = NagadListQuery {
            datefrom: range.from_str_value(),
            dateto: range.to_str_value(),
        };
        load_into(data, mode, notifications, "service nagad", async move {
            service_nagad::fetch_nagad_rows(&query).await
        });
    };

    Effect::new(move |_| {
        if !data.with_untracked(|d| d.loaded) {
            load(FetchMode::Loud);
        }
    });

    let resubmit_one = move |row: NagadServiceRow| {
        if !confirm(&format!("Resubmit {} to Nagad?", row.futuretrxid)) {
            return;
        }
        let request = ResubmitRequest {
            futuretrxid: row.futuretrxid,
            user: username(session),
        };
        spawn_local(async move {
            let outcome = service_nagad::resubmit(&request).await;
            if report_action(notifications, &outcome, "Resubmitted") {
                load(FetchMode::Silent);
            }
        });
    };

    let resubmit_selected = move || {
        let requests = data.with_untracked(|d| {
            chrome
                .selection
                .with_untracked(|sel| resubmit_requests(&d.data, sel, &username(session)))
        });
        if requests.is_empty() {
            return reject(notifications, ValidationError::EmptySelection);
        }
        if !confirm(&format!("Resubmit {} transaction(s) to Nagad?", requests.len())) {
            return;
        }

        spawn_local(async move {
            let plan = BatchPlan::with_defaults(requests);
            let result = run_batches(plan, state.progress, |request: ResubmitRequest| async move {
                matches!(service_nagad::resubmit(&request).await, Ok(r) if r.is_ok())
            })
            .await;

            notifications.notify(result.summary("Resubmit"));
            chrome.reset_selection();
            load(FetchMode::Silent);
        });
    };

    let row_actions: RowActions<NagadServiceRow> = Arc::new(move |row: &NagadServiceRow| {
        let row = row.clone();
        row.can_resubmit()
            .then(|| view! {
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| resubmit_one(row.clone())>
                    "Resubmit"
                </Button>
            })
            .into_any()
    });

    let running = Signal::derive(move || state.progress.with(Option::is_some));
    let busy = Signal::derive(move || data.with(|d| d.is_busy()) || running.get());
    let loading = Signal::derive(move || data.with(|d| d.loading));

    view! {
        <PageFrame page_id="a006_service_nagad--list" category=PAGE_CAT_LIST>
            <PageHeader title="Service Nagad">
                <ColumnMenu table=table />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| resubmit_selected()
                    disabled=Signal::derive(move || busy.get() || chrome.selection.with(|s| s.is_empty()))
                >
                    {move || format!("Resubmit selected ({})", chrome.selection.with(|s| s.len()))}
                </Button>
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
                    selection=chrome.selection
                    selectable=resubmittable
                    row_actions=row_actions
                    loading=loading
                />
            </div>

            <BatchProgressOverlay progress=state.progress title="Resubmitting to Nagad" />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resubmit_requests_only_for_failed_selected_rows() {
        let rows: Vec<NagadServiceRow> = [("1", "Failed"), ("2", "Success"), ("3", "Timeout"), ("4", "Failed")]
            .into_iter()
            .map(|(id, status)| NagadServiceRow {
                futuretrxid: id.into(),
                status: status.into(),
                ..Default::default()
            })
            .collect();

        let mut selection = SelectionSet::new();
        for key in ["1", "2", "3"] {
            selection.set(key, true);
        }

        let requests = resubmit_requests(&rows, &selection, "ops");
        let ids: Vec<_> = requests.iter().map(|r| r.futuretrxid.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(requests.iter().all(|r| r.user == "ops"));
    }
}
