use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeIntent {
    Success,
    Info,
    Error,
}

impl NoticeIntent {
    fn class(&self) -> &'static str {
        match self {
            NoticeIntent::Success => "notice--success",
            NoticeIntent::Info => "notice--info",
            NoticeIntent::Error => "notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub intent: NoticeIntent,
}

/// Transient user-facing notifications.
///
/// Every async failure in the app ends up here; nothing is retried
/// automatically.
#[derive(Clone, Copy)]
pub struct NotificationService {
    notices: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
    dismiss_after_ms: u32,
}

impl NotificationService {
    pub fn new(dismiss_after_ms: u32) -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
            dismiss_after_ms,
        }
    }

    pub fn success(&self, title: &str, description: &str) -> u64 {
        self.push(NoticeIntent::Success, title, description)
    }

    pub fn info(&self, title: &str, description: &str) -> u64 {
        self.push(NoticeIntent::Info, title, description)
    }

    pub fn error(&self, title: &str, description: &str) -> u64 {
        self.push(NoticeIntent::Error, title, description)
    }

    /// Show a notice; it is dismissed automatically after the configured delay
    pub fn push(&self, intent: NoticeIntent, title: &str, description: &str) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.notices.update(|list| {
            list.push(Notice {
                id,
                title: title.to_string(),
                description: description.to_string(),
                intent,
            })
        });

        let svc = *self;
        let delay = self.dismiss_after_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            svc.dismiss(id);
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.get()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the notice stack; mount once near the root
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <div class="notice-stack" role="status" aria-live="polite">
            <For
                each=move || svc.notices()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=format!("notice {}", notice.intent.class())
                            on:click=move |_| svc.dismiss(id)
                        >
                            <div class="notice__title">{notice.title}</div>
                            <div class="notice__description">{notice.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
