use chrono::{Duration, Local};
use leptos::prelude::*;
use thaw::*;

/// Native date picker bound to a yyyy-mm-dd string
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<String>,
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            prop:value=value
            on:input=move |ev| on_change(event_target_value(&ev))
        />
    }
}

/// Today as yyyy-mm-dd in the browser's timezone
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

pub fn days_ago(days: i64) -> String {
    (Local::now().date_naive() - Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

/// From/to pair with quick "Today" and "Last 7 days" presets
#[component]
pub fn DateRangeInput(date_from: RwSignal<String>, date_to: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="date-range">
            <Label>"From"</Label>
            <DateInput value=date_from on_change=move |v| date_from.set(v) />
            <Label>"To"</Label>
            <DateInput value=date_to on_change=move |v| date_to.set(v) />
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| {
                    date_from.set(today());
                    date_to.set(today());
                }
            >
                "Today"
            </Button>
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| {
                    date_from.set(days_ago(6));
                    date_to.set(today());
                }
            >
                "Last 7 days"
            </Button>
        </div>
    }
}
