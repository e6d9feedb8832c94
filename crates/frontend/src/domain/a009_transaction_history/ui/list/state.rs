use crate::shared::components::date_input::{days_ago, today};
use crate::shared::list_state::ListChrome;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct HistoryState {
    pub date_from: RwSignal<String>,
    pub date_to: RwSignal<String>,
    pub merchantcode: RwSignal<String>,
    pub chrome: ListChrome,
}

pub fn create_state() -> HistoryState {
    HistoryState {
        date_from: RwSignal::new(days_ago(1)),
        date_to: RwSignal::new(today()),
        merchantcode: RwSignal::new(String::new()),
        chrome: ListChrome::new(),
    }
}
