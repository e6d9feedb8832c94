use contracts::system::session::{is_supervisor, LoginInfo};
use leptos::prelude::*;

use super::storage;

/// Reads the stored login once and provides it to every screen below.
///
/// Screens never touch local storage themselves, so tests and previews can
/// provide a hand-built `LoginInfo` instead.
#[component]
pub fn SessionProvider(
    /// Overrides local storage when set
    #[prop(optional)]
    session: Option<LoginInfo>,
    children: Children,
) -> impl IntoView {
    let session = session.or_else(storage::load_login_info);
    match &session {
        Some(info) => log::info!("session: {} ({:?})", info.username, info.role()),
        None => log::warn!("no login info in local storage; privileged actions hidden"),
    }

    let signal = RwSignal::new(session);
    provide_context(signal.read_only());

    children()
}

/// Hook to access the current session
pub fn use_session() -> ReadSignal<Option<LoginInfo>> {
    use_context::<ReadSignal<Option<LoginInfo>>>().expect("SessionProvider not found in component tree")
}

/// Helper: supervisor check for the current session
pub fn use_is_supervisor() -> Signal<bool> {
    let session = use_session();
    Signal::derive(move || session.with(|s| is_supervisor(s.as_ref())))
}

/// Username sent along with actions; safe to call from async handlers
pub fn username(session: ReadSignal<Option<LoginInfo>>) -> String {
    session.with_untracked(|s| s.as_ref().map(|s| s.username.clone()).unwrap_or_default())
}
