use crate::shared::list_state::ListChrome;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct MyBankState {
    /// Bank code sent to `getMyBank.php`; empty means every bank
    pub bank: RwSignal<String>,
    pub chrome: ListChrome,
}

pub fn create_state() -> MyBankState {
    MyBankState {
        bank: RwSignal::new(String::new()),
        chrome: ListChrome::new(),
    }
}
