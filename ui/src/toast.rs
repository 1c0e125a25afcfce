use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use gloo_timers::future::sleep;
use types::notice::{Notice, NoticeLevel, NotificationSink};

const DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Global toast stack - use `use_toasts()` to access
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn show(&mut self, notice: Notice) {
        let id = {
            let mut next_id = self.next_id.write();
            *next_id += 1;
            *next_id
        };
        self.items.write().push(Toast { id, notice });

        // Not tied to the caller's scope: the caller may be a dialog that is
        // about to close.
        let mut this = *self;
        spawn_forever(async move {
            sleep(DISMISS_AFTER).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.write().retain(|toast| toast.id != id);
    }
}

impl NotificationSink for Toasts {
    fn success(&mut self, message: &str) {
        self.show(Notice::success(message));
    }

    fn error(&mut self, message: &str) {
        self.show(Notice::error(message));
    }
}

/// Provide the toast stack to the component tree.
pub fn use_toast_provider() -> Toasts {
    use_context_provider(|| Toasts {
        items: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    })
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn Toaster() -> Element {
    let mut toasts = use_toasts();
    let items = toasts.items.read().clone();

    rsx! {
        div { class: "toast-stack",
            for toast in items {
                {
                    let id = toast.id;
                    let class = match toast.notice.level {
                        NoticeLevel::Success => "toast toast-success",
                        NoticeLevel::Error => "toast toast-error",
                    };
                    rsx! {
                        div { key: "{id}", class,
                            role: "status",
                            span { class: "toast-message", "{toast.notice.message}" }
                            button {
                                class: "toast-close",
                                onclick: move |_| toasts.dismiss(id),
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}
