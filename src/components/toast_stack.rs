//! Toast Stack
//!
//! Stacked, dismissable, auto-expiring notification banners.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::notify::{Notifier, Severity};

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    /// HTML
    pub message: String,
}

/// Reactive [`Notifier`] rendered by [`ToastStack`]
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
    ttl_ms: u32,
}

impl ToastService {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
            ttl_ms,
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }
}

impl Notifier for ToastService {
    fn notify(&self, severity: Severity, message: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|list| {
            list.push(Toast { id, severity, message: message.to_string() })
        });

        let service = *self;
        Timeout::new(self.ttl_ms, move || service.dismiss(id)).forget();
    }
}

#[component]
pub fn ToastStack(service: ToastService) -> impl IntoView {
    view! {
        <div class="toast-container position-fixed top-0 end-0 p-3">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast show text-white {}", toast.severity.css_class())
                            role="alert"
                        >
                            <div class="d-flex">
                                <div class="toast-body" inner_html=toast.message></div>
                                <button
                                    type="button"
                                    class="btn-close btn-close-white me-2 m-auto"
                                    on:click=move |_| service.dismiss(id)
                                ></button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
