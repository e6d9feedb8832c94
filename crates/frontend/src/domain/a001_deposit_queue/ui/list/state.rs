use crate::shared::components::date_input::today;
use crate::shared::list_state::ListChrome;
use leptos::prelude::*;

/// Request parameters of the deposit queue plus its table chrome
#[derive(Clone, Copy)]
pub struct DepositQueueState {
    pub date_from: RwSignal<String>,
    pub date_to: RwSignal<String>,
    pub accountno: RwSignal<String>,
    pub chrome: ListChrome,
}

pub fn create_state() -> DepositQueueState {
    DepositQueueState {
        date_from: RwSignal::new(today()),
        date_to: RwSignal::new(today()),
        accountno: RwSignal::new(String::new()),
        chrome: ListChrome::new(),
    }
}
