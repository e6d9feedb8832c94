use crate::shared::components::date_input::today;
use crate::shared::list_state::ListChrome;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct WithdrawQueueState {
    pub date_from: RwSignal<String>,
    pub date_to: RwSignal<String>,
    pub chrome: ListChrome,
}

pub fn create_state() -> WithdrawQueueState {
    WithdrawQueueState {
        date_from: RwSignal::new(today()),
        date_to: RwSignal::new(today()),
        chrome: ListChrome::new(),
    }
}
