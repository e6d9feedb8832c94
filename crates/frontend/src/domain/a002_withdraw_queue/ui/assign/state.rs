use crate::shared::components::date_input::today;
use crate::shared::list_state::ListChrome;
use contracts::domain::a002_withdraw_queue::STATUS_PENDING;
use contracts::shared::batch::BatchProgress;
use contracts::shared::table::ColumnFilters;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct WithdrawAssignState {
    pub date_from: RwSignal<String>,
    pub date_to: RwSignal<String>,
    /// Composite key of the chosen source account
    pub source_key: RwSignal<String>,
    pub progress: RwSignal<Option<BatchProgress>>,
    pub chrome: ListChrome,
}

/// Opens on pending withdrawals; reset returns to that view
pub fn default_filters() -> ColumnFilters {
    ColumnFilters::from([("status".to_string(), STATUS_PENDING.to_string())])
}

pub fn create_state() -> WithdrawAssignState {
    WithdrawAssignState {
        date_from: RwSignal::new(today()),
        date_to: RwSignal::new(today()),
        source_key: RwSignal::new(String::new()),
        progress: RwSignal::new(None),
        chrome: ListChrome::with_default_filters(default_filters()),
    }
}
