//! Transient notifications. `ToastService` lives in context, `ToastHost`
//! renders the stack once near the app root.

use super::variant::Tone;
use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub tone: Tone,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn show(&self, tone: Tone, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let message = message.into();
        log::debug!("toast #{id} ({}): {message}", tone.as_str());
        self.toasts.update(|list| list.push(Toast { id, tone, message }));

        let service = *self;
        Timeout::new(AUTO_DISMISS_MS, move || service.dismiss(id)).forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Tone::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Tone::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(Tone::Info, message);
    }

    pub fn dismiss(&self, id: u64) {
        // the toast may already be gone if the host was unmounted
        let _ = self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || service.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast toast--{}", toast.tone.as_str())>
                            <span class="toast__icon">{icon(toast.tone.icon())}</span>
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" title="Dismiss" on:click=move |_| service.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
