//! Application shell: sidebar, tab strip and the open screens.

use crate::layout::center::Center;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::Shell;
use leptos::prelude::*;

/// Main layout. Opens the tab named in `?active=` on start.
#[component]
pub fn AppShell() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration(tab_label_for_key);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Center /> }.into_any()
        />
    }
}
