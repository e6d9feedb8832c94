use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::{BTreeMap, HashMap};
use web_sys::window;

/// Query parameter that remembers the active screen across reloads
pub const ACTIVE_PARAM: &str = "active";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Open the tab named in `?active=` and keep the URL in sync afterwards
    pub fn init_router_integration(&self, label_for: fn(&str) -> &'static str) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_from_search(&search) {
            self.open_tab(&active_key, label_for(&active_key));
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            let new_url = search_for_active(&current_search, &active_key);
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open tab {key}");
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close tab {key}");
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self.opened.with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// `?active=a004_sms&api=...` -> `Some("a004_sms")`
pub fn active_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(ACTIVE_PARAM)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

/// Replace the active key in `search`, keeping the other parameters (`?api=`)
pub fn search_for_active(search: &str, key: &str) -> String {
    let mut params: BTreeMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.insert(ACTIVE_PARAM.to_string(), key.to_string());
    let query = serde_qs::to_string(&params).unwrap_or_default();
    format!("?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_from_search() {
        assert_eq!(active_from_search("?active=a004_sms").as_deref(), Some("a004_sms"));
        assert_eq!(active_from_search("?active=&x=1"), None);
        assert_eq!(active_from_search(""), None);
    }

    #[test]
    fn test_search_round_trips_through_url() {
        let search = search_for_active("", "a008_crawler");
        assert_eq!(search, "?active=a008_crawler");
        assert_eq!(active_from_search(&search).as_deref(), Some("a008_crawler"));

        let switched = search_for_active("?active=a004_sms&api=http%3A%2F%2Flocalhost%3A9000", "a001_deposit_queue");
        assert_eq!(active_from_search(&switched).as_deref(), Some("a001_deposit_queue"));
        assert!(switched.contains("api="));
    }
}
