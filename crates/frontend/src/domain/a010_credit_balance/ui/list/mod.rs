//! Merchant credit balances; supervisors may post adjustments.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::credit;
use crate::shared::components::table::{ActiveFilterTags, ColumnMenu, DataTable, RowActions};
use crate::shared::components::{FilterPanel, PageHeader};
use crate::shared::fetch::{load_into, reject, report_action};
use crate::shared::icons::icon;
use crate::shared::list_state::{pagination_view, ListChrome};
use crate::shared::list_utils::format_amount;
use crate::shared::modal::use_modal;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::table_controls::{use_filtered_sorted_page, use_table_controls};
use crate::system::session::context::{use_is_supervisor, username};
use crate::system::session::use_session;
use contracts::domain::a010_credit_balance::{
    columns, CreditAdjustmentForm, CreditAdjustmentRequest, CreditBalance,
};
use contracts::shared::fetch_state::{FetchMode, FetchState};

fn row_key(row: &CreditBalance) -> String {
    row.key().to_string()
}

fn render_cell(row: &CreditBalance, key: &'static str) -> Option<AnyView> {
    if key != "available" {
        return None;
    }
    let available = row.available()?;
    let class = if available < 0.0 { "text-danger" } else { "" };
    Some(view! { <span class=class>{format_amount(available)}</span> }.into_any())
}

#[component]
pub fn CreditBalanceList() -> impl IntoView {
    let notifications = use_notifications();
    let modal = use_modal();
    let session = use_session();
    let is_supervisor = use_is_supervisor();
    let chrome = ListChrome::new();
    let data = RwSignal::new(FetchState::<CreditBalance>::default());

    let table = use_table_controls(columns(), chrome.table_options());
    let rows = Signal::derive(move || data.with(|d| d.data.clone()));
    let page_view = use_filtered_sorted_page(rows, table, chrome.filters.into(), chrome.page, chrome.page_size.into());

    let load = move |mode: FetchMode| {
        load_into(data, mode, notifications, "credit balance", credit::fetch_credit_balance());
    };

    Effect::new(move |_| {
        if !data.with_untracked(|d| d.loaded) {
            load(FetchMode::Loud);
        }
    });

    let adjust = move |row: CreditBalance| {
        spawn_local(async move {
            let title = format!("Credit adjustment for {}", row.merchantcode);
            let outcome = modal
                .open(title, move |handle| {
                    let amount = RwSignal::new(String::new());
                    let note = RwSignal::new(String::new());
                    view! {
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Amount (negative to deduct)"</Label>
                            <Input value=amount />
                            <Label>"Note"</Label>
                            <Textarea value=note />
                            <div class="modal-actions">
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.cancel()>
                                    "Cancel"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| handle.submit(CreditAdjustmentForm {
                                        amount: amount.get_untracked(),
                                        note: note.get_untracked(),
                                    })
                                >
                                    "Submit"
                                </Button>
                            </div>
                        </Flex>
                    }
                })
                .await;

            let Some(form) = outcome.submitted() else {
                return;
            };
            let request = match CreditAdjustmentRequest::from_form(&row, &form, &username(session)) {
                Ok(request) => request,
                Err(e) => return reject(notifications, e),
            };
            log::info!("credit adjustment {} {}", request.merchantcode, request.amount);
            let outcome = credit::adjust_credit(&request).await;
            if report_action(notifications, &outcome, "Credit adjusted") {
                load(FetchMode::Silent);
            }
        });
    };

    let row_actions: RowActions<CreditBalance> = Arc::new(move |row: &CreditBalance| {
        let row = row.clone();
        is_supervisor
            .get()
            .then(|| view! {
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| adjust(row.clone())>
                    "Adjust"
                </Button>
            })
            .into_any()
    });

    let loading = Signal::derive(move || data.with(|d| d.loading));
    let busy = Signal::derive(move || data.with(|d| d.is_busy()));

    view! {
        <PageFrame page_id="a010_credit_balance--list" category=PAGE_CAT_LIST>
            <PageHeader title="Credit balance">
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
