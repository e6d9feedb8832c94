use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal::{ModalHost, ModalService};
use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::system::session::SessionProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(NotificationService::new());
    provide_context(ModalService::new());

    view! {
        <ConfigProvider>
            <SessionProvider>
                <AppShell />
                <ModalHost />
                <NotificationHost />
            </SessionProvider>
        </ConfigProvider>
    }
}
