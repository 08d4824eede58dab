//! Toast notifications.
//!
//! `App` provides one [`ToastService`]; pages push notices into it and
//! [`ToastHost`] renders the stack. Every toast is closable and dismisses
//! itself after `ui.toast_dismiss_ms`.

use contracts::shared::api_error::{ApiError, NoticeKind};
use contracts::shared::settings::UiTiming;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub resolution: Option<String>,
    pub kind: NoticeKind,
}

impl Toast {
    pub fn new(kind: NoticeKind, message: impl Into<String>, resolution: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            resolution: resolution.filter(|r| !r.trim().is_empty()),
            kind,
        }
    }

    fn class(&self) -> String {
        format!("toast toast--{}", self.kind.as_str())
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    dismiss_ms: u32,
}

impl ToastService {
    pub fn new(dismiss_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            dismiss_ms,
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn show(&self, toast: Toast) {
        let id = toast.id;
        self.toasts.update(|list| list.push(toast));

        let service = *self;
        let delay = self.dismiss_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            service.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>, resolution: impl Into<String>) {
        self.show(Toast::new(
            NoticeKind::Success,
            message,
            Some(resolution.into()),
        ));
    }

    pub fn warning(&self, message: impl Into<String>, resolution: Option<String>) {
        self.show(Toast::new(NoticeKind::Warning, message, resolution));
    }

    /// Shows a failed request with the kind the server asked for.
    pub fn api_error(&self, err: &ApiError) {
        self.show(Toast::new(
            err.kind,
            err.message.clone(),
            Some(err.resolution.clone()),
        ));
    }

    pub fn dismiss(&self, id: Uuid) {
        // The toast may already be closed by hand
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new(UiTiming::default().toast_dismiss_ms)
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || service.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = toast.class();
                    view! {
                        <div class=class role="status">
                            <div class="toast__body">
                                <div class="toast__message">{toast.message.clone()}</div>
                                {toast.resolution.clone().map(|r| view! {
                                    <div class="toast__resolution">{r}</div>
                                })}
                            </div>
                            <button
                                class="toast__close"
                                title="Close"
                                on:click=move |_| service.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_resolution_is_dropped() {
        let toast = Toast::new(NoticeKind::Warning, "No rows selected.", Some("  ".to_string()));
        assert_eq!(toast.resolution, None);
        assert_eq!(toast.class(), "toast toast--warning");
    }

    #[test]
    fn test_toast_ids_are_unique() {
        let a = Toast::new(NoticeKind::Info, "a", None);
        let b = Toast::new(NoticeKind::Info, "a", None);
        assert_ne!(a.id, b.id);
    }
}
