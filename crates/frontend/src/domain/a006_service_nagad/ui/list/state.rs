use crate::shared::components::date_input::today;
use crate::shared::list_state::ListChrome;
use contracts::shared::batch::BatchProgress;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct NagadState {
    pub date_from: RwSignal<String>,
    pub date_to: RwSignal<String>,
    pub progress: RwSignal<Option<BatchProgress>>,
    pub chrome: ListChrome,
}

pub fn create_state() -> NagadState {
    NagadState {
        date_from: RwSignal::new(today()),
        date_to: RwSignal::new(today()),
        progress: RwSignal::new(None),
        chrome: ListChrome::new(),
    }
}
