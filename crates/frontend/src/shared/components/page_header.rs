use leptos::prelude::*;

/// Title row of a screen with its toolbar on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Empty means no subtitle line
    #[prop(optional, into)]
    subtitle: Signal<String>,

    /// Toolbar (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-text">
                <h1 class="page__title">{title}</h1>
                {move || {
                    let s = subtitle.get();
                    (!s.is_empty()).then(|| view! { <div class="page__subtitle">{s}</div> })
                }}
            </div>
            <div class="page__header-actions">
                {children()}
            </div>
        </div>
    }
}
