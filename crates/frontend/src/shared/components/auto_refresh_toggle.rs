use leptos::prelude::*;

/// "Auto refresh every N s" checkbox for polling screens
#[component]
pub fn AutoRefreshToggle(enabled: RwSignal<bool>, interval_ms: u32) -> impl IntoView {
    let label = format!("Auto refresh every {} s", interval_ms / 1000);
    view! {
        <label class="auto-refresh">
            <input
                type="checkbox"
                prop:checked=move || enabled.get()
                on:change=move |ev| enabled.set(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}
