use contracts::shared::fetch_state::{Notice, NoticeLevel};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub notice: Notice,
}

/// Toast queue shared by every screen
#[derive(Clone, Copy)]
pub struct NotificationService {
    toasts: RwSignal<Vec<Toast>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn notify(&self, notice: Notice) {
        let id = Uuid::new_v4();
        match notice.level {
            NoticeLevel::Error => log::error!("{}: {}", notice.title, notice.message),
            NoticeLevel::Warning => log::warn!("{}: {}", notice.title, notice.message),
            _ => log::info!("{}: {}", notice.title, notice.message),
        }
        self.toasts.update(|t| t.push(Toast { id, notice }));

        let this = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            this.dismiss(id);
        });
    }

    pub fn success(&self, title: &str, message: &str) {
        self.notify(Notice::new(NoticeLevel::Success, title, message));
    }

    pub fn info(&self, title: &str, message: &str) {
        self.notify(Notice::new(NoticeLevel::Info, title, message));
    }

    pub fn warning(&self, title: &str, message: &str) {
        self.notify(Notice::new(NoticeLevel::Warning, title, message));
    }

    pub fn error(&self, title: &str, message: &str) {
        self.notify(Notice::new(NoticeLevel::Error, title, message));
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "toast toast--success",
        NoticeLevel::Info => "toast toast--info",
        NoticeLevel::Warning => "toast toast--warning",
        NoticeLevel::Error => "toast toast--error",
    }
}

/// Renders the toast stack in the top-right corner
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toast-stack">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=level_class(toast.notice.level) on:click=move |_| service.dismiss(id)>
                            <div class="toast__title">{toast.notice.title.clone()}</div>
                            <div class="toast__message">{toast.notice.message.clone()}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
