//! Top bar: sidebar toggle, brand, logged-in user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::session::storage::clear_login_info;
use crate::system::session::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let toggle_sidebar = move |_| ctx.toggle_left();

    let logout = move |_| {
        clear_login_info();
        if let Some(w) = web_sys::window() {
            let _ = w.location().reload();
        }
    };

    let user_label = move || {
        session.with(|s| match s {
            Some(info) => format!("{} ({:?})", info.username, info.role()),
            None => "Guest".to_string(),
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Bropay"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_label}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
