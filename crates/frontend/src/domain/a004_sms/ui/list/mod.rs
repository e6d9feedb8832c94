pub mod state;

use std::sync::Arc;

use self::state::create_state;
use crate::api::sms;
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
use contracts::domain::a004_sms::{columns, MarkSmsRequest, SmsListQuery, SmsRecord};
use contracts::shared::fetch_state::{FetchMode, FetchState};
use contracts::shared::validation::DateRange;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn row_key(row: &SmsRecord) -> String {
    row.key().to_string()
}

#[component]
pub fn SmsList() -> impl IntoView {
    let notifications = use_notifications();
    let session = use_session();
    let state = create_state();
    let chrome = state.chrome;
    let data = RwSignal::new(FetchState::<SmsRecord>::default());

    let table = use_table_controls(columns(), chrome.table_options());
    let rows = Signal::derive(move || data.with(|d| d.data.clone()));
    let page_view = use_filtered_sorted_page(rows, table, chrome.filters.into(), chrome.page, chrome.page_size.into());

    let load = move |mode: FetchMode| {
        let range = match DateRange::parse(&state.date_from.get_untracked(), &state.date_to.get_untracked()) {
            Ok(range) => range,
            Err(e) => return reject(notifications, e),
        };
        let phone = state.phone.get_untracked().trim().to_string();
        let query = SmsListQuery {
            datefrom: range.from_str_value(),
            dateto: range.to_str_value(),
            phone: (!phone.is_empty()).then_some(phone),
        };
        load_into(data, mode, notifications, "sms", async move { sms::fetch_sms(&query).await });
    };

    Effect::new(move |_| {
        if !data.with_untracked(|d| d.loaded) {
            load(FetchMode::Loud);
        }
    });

    let mark_used = move |row: SmsRecord| {
        if !confirm(&format!("Mark SMS {} from {} as used?", row.id, row.sender)) {
            return;
        }
        let request = MarkSmsRequest {
            id: row.id,
            user: username(session),
        };
        spawn_local(async move {
            let outcome = sms::mark_used(&request).await;
            if report_action(notifications, &outcome, "SMS marked as used") {
                load(FetchMode::Silent);
            }
        });
    };

    let row_actions: RowActions<SmsRecord> = Arc::new(move |row: &SmsRecord| {
        let row = row.clone();
        if row.is_used() {
            return view! { <span class="badge badge--secondary">"Used"</span> }.into_any();
        }
        view! {
            <Button appearance=ButtonAppearance::Subtle on_click=move |_| mark_used(row.clone())>
                "Mark used"
            </Button>
        }
        .into_any()
    });

    let loading = Signal::derive(move || data.with(|d| d.loading));
    let busy = Signal::derive(move || data.with(|d| d.is_busy()));

    view! {
        <PageFrame page_id="a004_sms--list" category=PAGE_CAT_LIST>
            <PageHeader title="SMS">
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
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Phone"</Label>
                                <Input value=state.phone placeholder="All phones" />
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
