use contracts::shared::batch::BatchProgress;
use leptos::prelude::*;

/// Blocking overlay shown while a bulk action runs
#[component]
pub fn BatchProgressOverlay(
    #[prop(into)]
    progress: Signal<Option<BatchProgress>>,

    /// Verb shown in the title, e.g. "Resubmitting"
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! {
        {move || progress.get().map(|p| {
            let title = title.clone();
            view! {
                <div class="batch-overlay">
                    <div class="batch-overlay__card">
                        <div class="batch-overlay__title">{title}</div>
                        <div class="progress">
                            <div class="progress__bar" style=format!("width: {}%;", p.percent())></div>
                        </div>
                        <div class="batch-overlay__label">{p.label()}</div>
                    </div>
                </div>
            }
        })}
    }
}
