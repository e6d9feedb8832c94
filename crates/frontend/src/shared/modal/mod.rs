//! Awaitable modals.
//!
//! ```rust,ignore
//! let modal = use_modal();
//! spawn_local(async move {
//!     let outcome = modal
//!         .open("Edit memo", move |handle: ModalHandle<String>| view! { ... })
//!         .await;
//!     if let ModalOutcome::Submitted(memo) = outcome { ... }
//! });
//! ```
//!
//! The opener awaits a oneshot channel that the modal body resolves through
//! its [`ModalHandle`]. Closing via the X button, Escape or the overlay
//! resolves it as `Cancelled`.

use futures_channel::oneshot;
use leptos::ev;
use leptos::prelude::*;

use crate::shared::icons::icon;

#[derive(Debug, Clone, PartialEq)]
pub enum ModalOutcome<R> {
    Submitted(R),
    Cancelled,
}

impl<R> ModalOutcome<R> {
    pub fn submitted(self) -> Option<R> {
        match self {
            ModalOutcome::Submitted(value) => Some(value),
            ModalOutcome::Cancelled => None,
        }
    }
}

#[derive(Clone)]
struct ActiveModal {
    id: u64,
    title: String,
    body: ViewFn,
    on_cancel: Callback<()>,
}

#[derive(Clone, Copy)]
pub struct ModalService {
    active: RwSignal<Option<ActiveModal>>,
    next_id: StoredValue<u64>,
}

/// Passed to the modal body; resolves the awaiting opener
pub struct ModalHandle<R: Send + Sync + 'static> {
    sender: StoredValue<Option<oneshot::Sender<ModalOutcome<R>>>>,
}

impl<R: Send + Sync + 'static> Clone for ModalHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for ModalHandle<R> {}

impl<R: Send + Sync + 'static> ModalHandle<R> {
    pub fn submit(&self, value: R) {
        self.resolve(ModalOutcome::Submitted(value));
    }

    pub fn cancel(&self) {
        self.resolve(ModalOutcome::Cancelled);
    }

    fn resolve(&self, outcome: ModalOutcome<R>) {
        let sender = self.sender.try_update_value(|s| s.take()).flatten();
        if let Some(sender) = sender {
            // receiver gone means the opener was dropped; nothing to do
            let _ = sender.send(outcome);
        }
    }
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    pub fn is_open(&self) -> bool {
        self.active.with(Option::is_some)
    }

    /// Show a modal and wait until its body submits or it is dismissed.
    /// Opening a second modal cancels the first one.
    pub async fn open<R, F, V>(&self, title: impl Into<String>, body: F) -> ModalOutcome<R>
    where
        R: Send + Sync + 'static,
        F: Fn(ModalHandle<R>) -> V + Send + Sync + 'static,
        V: IntoView + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        let handle = ModalHandle {
            sender: StoredValue::new(Some(sender)),
        };

        if let Some(previous) = self.active.get_untracked() {
            previous.on_cancel.run(());
        }

        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);
        self.active.set(Some(ActiveModal {
            id,
            title: title.into(),
            body: ViewFn::from(move || body(handle).into_any()),
            on_cancel: Callback::new(move |_| handle.cancel()),
        }));

        let outcome = receiver.await.unwrap_or(ModalOutcome::Cancelled);

        if self.active.with_untracked(|a| a.as_ref().map(|m| m.id) == Some(id)) {
            self.active.set(None);
        }
        outcome
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}

/// Browser `confirm()`; no window counts as "no"
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Browser `prompt()`; `None` when cancelled
pub fn prompt(message: &str, default: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.prompt_with_message_and_default(message, default).ok())
        .flatten()
}

/// Renders whichever modal is currently open
#[component]
pub fn ModalHost() -> impl IntoView {
    let service = use_modal();

    view! {
        {move || {
            service.active.get().map(|modal| {
                view! {
                    <ModalFrame title=modal.title.clone() on_close=modal.on_cancel>
                        {modal.body.run()}
                    </ModalFrame>
                }
            })
        }}
    }
}

#[component]
pub fn ModalFrame(
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|e: ev::MouseEvent| e.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <div class="modal-header-actions">
                        <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
