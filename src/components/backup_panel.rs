//! Backup Panel Component
//!
//! Buttons that start the sw6 database and file backups.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{BackupKind, HttpBridgeApi};
use crate::backup::run_backup;
use crate::components::ToastService;

#[component]
pub fn BackupPanel(api: HttpBridgeApi, toasts: ToastService) -> impl IntoView {
    view! {
        <div class="backup-panel">
            <BackupButton kind=BackupKind::Database api=api.clone() toasts=toasts />
            <BackupButton kind=BackupKind::Files api=api toasts=toasts />
        </div>
    }
}

#[component]
fn BackupButton(kind: BackupKind, api: HttpBridgeApi, toasts: ToastService) -> impl IntoView {
    let (busy, set_busy) = signal(false);

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        let api = api.clone();
        spawn_local(async move {
            run_backup(&api, &toasts, kind).await;
            // Spinner off whatever the outcome
            set_busy.set(false);
        });
    };

    view! {
        <button
            class=move || if busy.get() { "btn btn-primary spinner-grow" } else { "btn btn-primary" }
            disabled=move || busy.get()
            on:click=on_click
        >
            {format!("sw6 {} Backup", kind.label())}
        </button>
    }
}
